use std::path::PathBuf;

/// Optional pipeline features, chosen when a calculator is built.
///
/// # Example
/// ```
/// use shunting_yard::config::Capabilities;
///
/// let caps = Capabilities::default();
/// assert!(caps.functions && caps.negation_folding);
///
/// let bare = Capabilities::none();
/// assert!(!bare.functions && !bare.negation_folding);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Accept zero-argument calls such as `pi()`.
    pub functions:        bool,
    /// Fold `(-x)` into a single negated token.
    pub negation_folding: bool,
}

impl Capabilities {
    /// Every optional feature switched off.
    #[must_use]
    pub const fn none() -> Self {
        Self { functions:        false,
               negation_folding: false, }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { functions:        true,
               negation_folding: true, }
    }
}

/// Everything needed to build a [`Calculator`](crate::interpreter::calculator::Calculator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Optional pipeline features.
    pub capabilities: Capabilities,
    /// Directories scanned for shared libraries exporting functions. Only
    /// consulted when function calls are enabled.
    pub library_dirs: Vec<PathBuf>,
}
