use std::{
    env::consts::DLL_EXTENSION,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use libloading::Library;

use crate::{
    error::LibraryError,
    interpreter::resolver::core::{Callable, FunctionResolver},
};

/// Prefix an exported symbol needs to be callable from an expression.
///
/// A library exporting `impAvg` provides the function `Avg()`. Symbols
/// without the prefix are never bound.
pub const SYMBOL_PREFIX: &str = "imp";

/// Signature every imported symbol must have.
type ImportedFn = unsafe extern "C" fn() -> f64;

struct LoadedLibrary {
    path:    PathBuf,
    library: Arc<Library>,
}

/// Resolves functions exported by shared libraries.
///
/// Libraries are searched in load order; the first one exporting the
/// requested symbol wins.
#[derive(Default)]
pub struct LibraryResolver {
    libraries: Vec<LoadedLibrary>,
}

impl LibraryResolver {
    /// Creates a resolver with no libraries loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every shared library found directly inside each directory.
    ///
    /// # Errors
    /// Fails if a directory cannot be read, contains no shared library, or a
    /// library cannot be opened.
    pub fn load_dirs<P: AsRef<Path>>(dirs: &[P]) -> Result<Self, LibraryError> {
        let mut resolver = Self::new();
        for dir in dirs {
            resolver.load_dir(dir.as_ref())?;
        }
        Ok(resolver)
    }

    /// Loads every shared library found directly inside `dir`, in file name
    /// order.
    ///
    /// # Errors
    /// Fails if the directory cannot be read, contains no shared library, or a
    /// library cannot be opened.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, LibraryError> {
        let io_error = |source| LibraryError::Io { path: dir.to_path_buf(),
                                                   source };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == DLL_EXTENSION) {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            return Err(LibraryError::NoLibraries { path: dir.to_path_buf() });
        }

        paths.sort();
        let found = paths.len();
        for path in paths {
            self.load_file(path)?;
        }
        tracing::debug!(dir = %dir.display(), found, "loaded function libraries");
        Ok(found)
    }

    /// Opens a single shared library.
    ///
    /// # Errors
    /// Returns [`LibraryError::Load`] if the loader rejects the file.
    pub fn load_file(&mut self, path: impl Into<PathBuf>) -> Result<(), LibraryError> {
        let path = path.into();
        // SAFETY: opening a library runs its initialisers. Libraries are
        // supplied explicitly by the user as trusted function providers.
        let library = unsafe { Library::new(&path) }.map_err(|source| LibraryError::Load { path:
                                                                                          path.clone(),
                                                                                      source })?;
        tracing::debug!(path = %path.display(), "loaded library");
        self.libraries.push(LoadedLibrary { path,
                                            library: Arc::new(library) });
        Ok(())
    }

    /// Paths of the loaded libraries, in search order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.libraries.iter().map(|loaded| loaded.path.as_path())
    }

    /// Number of loaded libraries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Returns `true` if no library is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl FunctionResolver for LibraryResolver {
    fn resolve(&self, name: &str) -> Option<Callable> {
        let symbol = format!("{SYMBOL_PREFIX}{name}");

        self.libraries.iter().find_map(|loaded| {
            // SAFETY: imported symbols are required to have the `ImportedFn`
            // signature. The pointer stays valid because the callable holds
            // the library.
            let export = unsafe { loaded.library.get::<ImportedFn>(symbol.as_bytes()) }.ok()?;
            let function: ImportedFn = *export;
            tracing::debug!(symbol = %symbol, path = %loaded.path.display(), "bound symbol");

            let library = Arc::clone(&loaded.library);
            Some(Callable::new(move || {
                let _library = &library;
                // SAFETY: see above.
                Ok(unsafe { function() })
            }))
        })
    }
}
