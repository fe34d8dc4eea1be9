/// The resolver seam and the callable handle it returns.
///
/// Defines [`FunctionResolver`](core::FunctionResolver), the only capability
/// the pipeline needs from whatever supplies external functions, and
/// [`Callable`](core::Callable), the handle a function token caches.
pub mod core;
/// Built-in constant functions.
///
/// An in-memory resolver preloaded with `pi()`, `e()` and `tau()`, which
/// callers can extend with their own closures.
pub mod table;
/// Functions exported by shared libraries.
///
/// Loads every shared object found in a set of directories and binds
/// `imp`-prefixed symbols by name.
pub mod library;
/// Resolver composition.
///
/// Tries several resolvers in order and returns the first binding found.
pub mod chain;

pub use chain::ChainResolver;
pub use core::{CallResult, Callable, FunctionResolver};
pub use library::LibraryResolver;
pub use table::TableResolver;
