use std::fmt;

use crate::{
    error::ParseError,
    interpreter::{
        operator::Operator,
        resolver::{CallResult, Callable, FunctionResolver},
    },
};

/// A token paired with the byte offset where it starts in the source.
///
/// Numbers produced during evaluation take the offset of the operator or
/// call that produced them.
pub type Positioned = (Token, usize);

/// The sequence handed from one pipeline stage to the next.
pub type TokenStream = Vec<Positioned>;

/// Discriminates token variants without borrowing their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A numeric literal or intermediate result.
    Number,
    /// A binary operator.
    Operator,
    /// `(`
    LeftBrace,
    /// `)`
    RightBrace,
    /// A zero-argument function call.
    Function,
}

/// A unit flowing through the tokenizer, converter and evaluator.
///
/// Every stage matches on this enum exhaustively, so adding a variant is a
/// compile-time checked change.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric value.
    Number(Number),
    /// A binary operator resolved from the operator table.
    Operator(Operator),
    /// A parenthesis.
    Brace(Brace),
    /// A function call bound at construction time.
    Function(Function),
}

impl Token {
    /// Returns the variant tag.
    ///
    /// # Example
    /// ```
    /// use shunting_yard::interpreter::token::{Brace, Number, Tag, Token};
    ///
    /// assert_eq!(Token::Number(Number::new(1.0)).tag(), Tag::Number);
    /// assert_eq!(Token::Brace(Brace::Right).tag(), Tag::RightBrace);
    /// ```
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Number(_) => Tag::Number,
            Self::Operator(_) => Tag::Operator,
            Self::Brace(Brace::Left) => Tag::LeftBrace,
            Self::Brace(Brace::Right) => Tag::RightBrace,
            Self::Function(_) => Tag::Function,
        }
    }

    /// Returns `true` if the token ends an operand: a number, a function call
    /// or a closing parenthesis.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Function(_) | Self::Brace(Brace::Right))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::Brace(brace) => write!(f, "{brace}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

/// A floating-point value with an optional pending sign flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    value:   f64,
    negated: bool,
}

impl Number {
    /// Creates a number that is not negated.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value,
               negated: false }
    }

    /// The value with the negation marker applied.
    ///
    /// # Example
    /// ```
    /// use shunting_yard::interpreter::token::Number;
    ///
    /// let mut n = Number::new(5.0);
    /// n.negate();
    /// assert!(n.is_negated());
    /// assert_eq!(n.value(), -5.0);
    /// ```
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.negated { -self.value } else { self.value }
    }

    /// Returns `true` if a unary minus was folded into this number.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Toggles the negation marker.
    pub const fn negate(&mut self) {
        self.negated = !self.negated;
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Number {
    /// Negative values are written as `(-x)` so the text tokenizes back to
    /// the same value when negation folding is enabled.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        if value.is_sign_negative() && !value.is_nan() {
            write!(f, "(-{})", -value)
        } else {
            write!(f, "{value}")
        }
    }
}

/// Which side of a parenthesized group a brace is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brace {
    /// `(`
    Left,
    /// `)`
    Right,
}

impl fmt::Display for Brace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Left => "(",
                        Self::Right => ")",
                    })
    }
}

/// A zero-argument function call with its binding resolved.
#[derive(Debug, Clone)]
pub struct Function {
    name:     String,
    callable: Callable,
    negated:  bool,
}

impl Function {
    /// Binds `name` through `resolver`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnknownFunction`] if the resolver has no binding
    /// for `name`. Resolution never happens lazily.
    ///
    /// # Example
    /// ```
    /// use shunting_yard::{
    ///     error::ParseError,
    ///     interpreter::{resolver::TableResolver, token::Function},
    /// };
    ///
    /// let resolver = TableResolver::with_builtins();
    /// let pi = Function::resolve("pi", &resolver, 0).unwrap();
    /// assert_eq!(pi.call(), Ok(std::f64::consts::PI));
    ///
    /// let err = Function::resolve("foo", &resolver, 3).unwrap_err();
    /// assert!(matches!(err, ParseError::UnknownFunction { position: 3, .. }));
    /// ```
    pub fn resolve(name: &str,
                   resolver: &dyn FunctionResolver,
                   position: usize)
                   -> Result<Self, ParseError> {
        let callable =
            resolver.resolve(name)
                    .ok_or_else(|| ParseError::UnknownFunction { name: name.to_string(),
                                                                 position })?;
        Ok(Self { name: name.to_string(),
                  callable,
                  negated: false })
    }

    /// The name the function was called by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the bound callable and applies the negation marker.
    ///
    /// # Errors
    /// Propagates the failure reported by the callable.
    pub fn call(&self) -> CallResult {
        let result = self.callable.invoke()?;
        Ok(if self.negated { -result } else { result })
    }

    /// Returns `true` if a unary minus was folded into this call.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Toggles the negation marker.
    pub const fn negate(&mut self) {
        self.negated = !self.negated;
    }
}

impl PartialEq for Function {
    /// Calls compare by name and sign; bindings are not comparable.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.negated == other.negated
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "(-{}())", self.name)
        } else {
            write!(f, "{}()", self.name)
        }
    }
}
