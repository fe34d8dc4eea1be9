use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during tokenizing or conversion.
pub enum ParseError {
    /// Found input that does not form a valid token.
    #[error("Error at position {position}: Unexpected input '{token}': {details}.")]
    Lexical {
        /// The offending substring.
        token:    String,
        /// Byte offset of the substring in the source.
        position: usize,
        /// Why the input was rejected.
        details:  String,
    },
    /// An operator-like symbol that the operator table does not define.
    #[error("Error at position {position}: Unknown operator '{spelling}'.")]
    UnknownOperator {
        /// The spelling that was looked up.
        spelling: String,
        /// Byte offset of the spelling in the source.
        position: usize,
    },
    /// A function name with no resolvable binding.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset of the name in the source.
        position: usize,
    },
    /// Operands and operators do not alternate, as in `2 3 +` or `2(-3)`.
    #[error("Error at position {position}: Unexpected '{token}', expected {expected}.")]
    UnexpectedToken {
        /// The misplaced token.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
        /// What the grammar allows at that point.
        expected: &'static str,
    },
    /// Parentheses do not balance.
    #[error("Error at position {position}: Mismatched parentheses: {details}.")]
    GroupingMismatch {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
        /// Which side is missing its partner.
        details:  &'static str,
    },
}

impl ParseError {
    pub(crate) fn lexical(token: impl Into<String>, position: usize, details: impl Into<String>) -> Self {
        Self::Lexical { token: token.into(),
                        position,
                        details: details.into() }
    }
}
