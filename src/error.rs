use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression and
/// converting it to postfix order. Parse errors include unrecognized
/// characters, malformed literals, unknown operators or functions, and
/// unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// sequence to a single value, such as operators without enough operands or
/// `xor` applied to fractional values.
pub mod runtime_error;
/// Shared library loading errors.
///
/// Raised while scanning library directories and opening the shared objects
/// that provide external functions.
pub mod library_error;

pub use library_error::LibraryError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure the evaluation pipeline can report.
///
/// Every variant is fatal for the expression being evaluated: the pipeline
/// stops at the first error and never produces a partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// The expression could not be tokenized or converted.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix sequence could not be reduced to a value.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// External function libraries could not be loaded.
    #[error(transparent)]
    Library(#[from] LibraryError),
}
