use std::collections::HashMap;

use crate::interpreter::resolver::core::{Callable, FunctionResolver};

/// Defines the built-in constant functions by generating a lookup table and a
/// name list.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static name/value table),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_constants {
    (
        $(
            $name:literal => $value:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, f64)] = &[
            $(
                ($name, $value),
            )*
        ];
        /// Names of the functions [`TableResolver::with_builtins`] registers.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_constants! {
    "pi"  => std::f64::consts::PI,
    "e"   => std::f64::consts::E,
    "tau" => std::f64::consts::TAU,
}

/// Resolves functions from an in-memory name table.
///
/// # Example
/// ```
/// use shunting_yard::interpreter::resolver::{Callable, FunctionResolver, TableResolver};
///
/// let mut resolver = TableResolver::with_builtins();
/// resolver.register("answer", Callable::constant(42.0));
///
/// assert_eq!(resolver.resolve("answer").unwrap().invoke(), Ok(42.0));
/// assert_eq!(resolver.resolve("pi").unwrap().invoke(), Ok(std::f64::consts::PI));
/// assert!(resolver.resolve("foo").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
    functions: HashMap<String, Callable>,
}

impl TableResolver {
    /// Creates a resolver with no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver holding the built-in constants.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut resolver = Self::new();
        for (name, value) in BUILTIN_TABLE {
            resolver.register(*name, Callable::constant(*value));
        }
        resolver
    }

    /// Binds `name` to `callable`, replacing any earlier binding.
    pub fn register(&mut self, name: impl Into<String>, callable: Callable) -> &mut Self {
        self.functions.insert(name.into(), callable);
        self
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if no function is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl FunctionResolver for TableResolver {
    fn resolve(&self, name: &str) -> Option<Callable> {
        self.functions.get(name).cloned()
    }
}
