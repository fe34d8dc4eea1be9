use std::{fmt, sync::Arc};

/// Outcome of invoking an external function.
///
/// The error side carries a human-readable reason; the evaluator treats any
/// error as fatal.
pub type CallResult = Result<f64, String>;

/// A resolved zero-argument function.
///
/// Cloning a `Callable` is cheap and shares the underlying binding, which
/// keeps whatever the binding depends on (such as a loaded library) alive.
#[derive(Clone)]
pub struct Callable(Arc<dyn Fn() -> CallResult + Send + Sync>);

impl Callable {
    /// Wraps a closure.
    pub fn new(function: impl Fn() -> CallResult + Send + Sync + 'static) -> Self {
        Self(Arc::new(function))
    }

    /// A callable that always returns `value`.
    ///
    /// # Example
    /// ```
    /// use shunting_yard::interpreter::resolver::Callable;
    ///
    /// let answer = Callable::constant(42.0);
    /// assert_eq!(answer.invoke(), Ok(42.0));
    /// ```
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(move || Ok(value))
    }

    /// Calls the function with no arguments.
    ///
    /// # Errors
    /// Returns the reason reported by the binding if it cannot produce a
    /// value.
    pub fn invoke(&self) -> CallResult {
        (self.0)()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

/// Looks up external functions by name.
///
/// Resolution happens once, when the tokenizer builds a function token; the
/// returned [`Callable`] is cached on the token and invoked during
/// evaluation.
pub trait FunctionResolver {
    /// Returns the binding for `name`, or `None` if no function by that name
    /// is registered.
    fn resolve(&self, name: &str) -> Option<Callable>;
}

impl<R: FunctionResolver + ?Sized> FunctionResolver for Box<R> {
    fn resolve(&self, name: &str) -> Option<Callable> {
        (**self).resolve(name)
    }
}

impl<R: FunctionResolver + ?Sized> FunctionResolver for &R {
    fn resolve(&self, name: &str) -> Option<Callable> {
        (**self).resolve(name)
    }
}
