use crate::interpreter::resolver::core::{Callable, FunctionResolver};

/// Tries each resolver in registration order.
///
/// # Example
/// ```
/// use shunting_yard::interpreter::resolver::{
///     Callable, ChainResolver, FunctionResolver, TableResolver,
/// };
///
/// let mut overrides = TableResolver::new();
/// overrides.register("pi", Callable::constant(3.0));
///
/// let chain = ChainResolver::new().with(overrides)
///                                 .with(TableResolver::with_builtins());
///
/// assert_eq!(chain.resolve("pi").unwrap().invoke(), Ok(3.0));
/// assert_eq!(chain.resolve("tau").unwrap().invoke(), Ok(std::f64::consts::TAU));
/// assert!(chain.resolve("foo").is_none());
/// ```
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn FunctionResolver>>,
}

impl ChainResolver {
    /// Creates an empty chain, which resolves nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resolver with the lowest priority so far.
    #[must_use]
    pub fn with(mut self, resolver: impl FunctionResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }
}

impl FunctionResolver for ChainResolver {
    fn resolve(&self, name: &str) -> Option<Callable> {
        self.resolvers.iter().find_map(|resolver| resolver.resolve(name))
    }
}
