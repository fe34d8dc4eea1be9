use crate::{
    config::{Capabilities, Config},
    error::{Error, LibraryError},
    interpreter::{
        converter::convert,
        evaluator::evaluate,
        lexer::{ParseResult, Tokenizer},
        operator::OperatorTable,
        resolver::{ChainResolver, FunctionResolver, LibraryResolver, TableResolver},
        token::TokenStream,
    },
};

/// The full pipeline: tokenizer, converter and evaluator sharing one
/// operator table, one set of capabilities and one function resolver.
///
/// # Example
/// ```
/// use shunting_yard::{config::Capabilities, interpreter::calculator::Calculator};
///
/// let calculator = Calculator::new();
/// assert_eq!(calculator.evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(calculator.evaluate("2 * pi()").unwrap(), std::f64::consts::TAU);
///
/// let bare = Calculator::new().with_capabilities(Capabilities::none());
/// assert!(bare.evaluate("pi()").is_err());
/// ```
pub struct Calculator<'t> {
    table:        &'t OperatorTable,
    capabilities: Capabilities,
    resolver:     Box<dyn FunctionResolver>,
}

impl Calculator<'static> {
    /// Uses the global operator table, every capability, and the built-in
    /// functions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(OperatorTable::global())
    }

    /// Builds a calculator from a configuration, loading function libraries
    /// from the configured directories.
    ///
    /// Library functions take precedence over built-ins of the same name.
    ///
    /// # Errors
    /// Returns a [`LibraryError`] if a library directory cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, LibraryError> {
        let mut calculator = Self::new().with_capabilities(config.capabilities);

        if config.capabilities.functions && !config.library_dirs.is_empty() {
            let libraries = LibraryResolver::load_dirs(&config.library_dirs)?;
            calculator = calculator.with_resolver(ChainResolver::new().with(libraries)
                                                                      .with(TableResolver::with_builtins()));
        }

        Ok(calculator)
    }
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Calculator<'t> {
    /// Uses a custom operator table, every capability, and the built-in
    /// functions.
    #[must_use]
    pub fn with_table(table: &'t OperatorTable) -> Self {
        Self { table,
               capabilities: Capabilities::default(),
               resolver: Box::new(TableResolver::with_builtins()) }
    }

    /// Replaces the capabilities.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Replaces the function resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl FunctionResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// A tokenizer configured like this calculator.
    #[must_use]
    pub fn tokenizer(&self) -> Tokenizer<'_> {
        let tokenizer =
            Tokenizer::new(self.table).with_negation_folding(self.capabilities.negation_folding);

        if self.capabilities.functions {
            tokenizer.with_resolver(&*self.resolver)
        } else {
            tokenizer
        }
    }

    /// Runs the tokenizer and the converter, returning the postfix sequence.
    ///
    /// # Errors
    /// Returns the first [`ParseError`](crate::error::ParseError) either
    /// stage reports.
    pub fn to_rpn(&self, source: &str) -> ParseResult<TokenStream> {
        convert(self.tokenizer().tokenize(source)?)
    }

    /// Evaluates an expression.
    ///
    /// # Errors
    /// Returns the first error any stage reports; no partial result is ever
    /// produced.
    pub fn evaluate(&self, source: &str) -> Result<f64, Error> {
        let rpn = self.to_rpn(source)?;
        let result = evaluate(rpn)?.value();
        tracing::debug!(source, result, "evaluated");
        Ok(result)
    }
}
