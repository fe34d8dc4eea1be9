use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while loading function libraries.
pub enum LibraryError {
    /// A library directory could not be read.
    #[error("Unable to read library directory {}: {source}", path.display())]
    Io {
        /// The directory being scanned.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// A shared object could not be opened.
    #[error("Error while loading library at {}: {source}", path.display())]
    Load {
        /// The library file.
        path:   PathBuf,
        /// The loader failure.
        source: libloading::Error,
    },
    /// A library directory contained no shared objects.
    #[error("There was no library found in {}", path.display())]
    NoLibraries {
        /// The directory that was scanned.
        path: PathBuf,
    },
}
