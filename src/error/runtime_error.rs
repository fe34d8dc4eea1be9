use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator whose two preceding elements are not both numbers.
    #[error("Error at position {position}: Operator '{operator}' is missing a numeric operand.")]
    OperandTypeMismatch {
        /// Spelling of the operator.
        operator: &'static str,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// `xor` applied to a value with a fractional part, or one that does not
    /// fit an integer.
    #[error("Error at position {position}: xor can't be applied to non-integral value {value}.")]
    NonIntegralXorOperand {
        /// The rejected operand.
        value:    f64,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// The sequence did not reduce to exactly one number.
    #[error("Malformed expression: evaluation left {remaining} values instead of one.")]
    MalformedExpression {
        /// Number of elements left on the working stack.
        remaining: usize,
    },
    /// An external function failed when invoked.
    #[error("Error at position {position}: Function '{name}' failed: {details}.")]
    FunctionCallFailed {
        /// The name of the function.
        name:     String,
        /// Message reported by the callable.
        details:  String,
        /// Byte offset of the call in the source.
        position: usize,
    },
}
