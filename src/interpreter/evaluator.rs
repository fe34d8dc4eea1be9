use crate::{
    error::RuntimeError,
    interpreter::{
        operator::{Operator, OperatorKind},
        token::{Number, Token, TokenStream},
    },
    util::num::{f64_to_i64_checked, i64_to_f64_rounded},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix sequence to a single number.
///
/// The sequence is consumed left to right onto a working stack. Numbers are
/// pushed as they are. An operator replaces the two elements before it with
/// its result, and a function call is replaced by the value it returns. When
/// the pass is over exactly one number has to remain.
///
/// # Errors
/// - [`RuntimeError::OperandTypeMismatch`] if an operator is not preceded by
///   two numbers.
/// - [`RuntimeError::NonIntegralXorOperand`] if `xor` sees a fractional value.
/// - [`RuntimeError::FunctionCallFailed`] if a function binding fails.
/// - [`RuntimeError::MalformedExpression`] if the pass does not end with
///   exactly one number.
///
/// # Example
/// ```
/// use shunting_yard::interpreter::{
///     converter::convert, evaluator::evaluate, lexer::Tokenizer, operator::OperatorTable,
/// };
///
/// let table = OperatorTable::standard();
/// let tokens = Tokenizer::new(&table).tokenize("2 + 3 * 4").unwrap();
/// let result = evaluate(convert(tokens).unwrap()).unwrap();
///
/// assert_eq!(result.value(), 14.0);
/// ```
pub fn evaluate(rpn: TokenStream) -> EvalResult<Number> {
    let mut working: TokenStream = Vec::with_capacity(rpn.len());

    for (token, position) in rpn {
        match token {
            Token::Operator(operator) => {
                let right = working.pop();
                let left = working.pop();
                let (Some((Token::Number(left), _)), Some((Token::Number(right), _))) = (left, right)
                else {
                    return Err(RuntimeError::OperandTypeMismatch { operator: operator.spelling,
                                                                   position });
                };

                let result = apply(operator, left.value(), right.value(), position)?;
                tracing::trace!(%left, %operator, %right, result, "reduced");
                working.push((Token::Number(Number::new(result)), position));
            },
            Token::Function(function) => {
                let result =
                    function.call()
                            .map_err(|details| RuntimeError::FunctionCallFailed { name:
                                                                                      function.name()
                                                                                              .to_string(),
                                                                                  details,
                                                                                  position })?;
                tracing::trace!(function = %function, result, "called");
                working.push((Token::Number(Number::new(result)), position));
            },
            Token::Number(_) | Token::Brace(_) => working.push((token, position)),
        }
    }

    match working.as_slice() {
        [(Token::Number(number), _)] => Ok(*number),
        _ => Err(RuntimeError::MalformedExpression { remaining: working.len() }),
    }
}

/// Applies a binary operator to two values.
///
/// Division follows IEEE semantics: dividing by zero yields an infinity or
/// NaN rather than an error.
///
/// # Errors
/// Returns [`RuntimeError::NonIntegralXorOperand`] if `xor` is applied to a
/// value that is not an integer.
///
/// # Example
/// ```
/// use shunting_yard::{
///     error::RuntimeError,
///     interpreter::{evaluator::apply, operator::OperatorTable},
/// };
///
/// let table = OperatorTable::standard();
/// let xor = table.lookup("xor", 0).unwrap();
/// let divide = table.lookup("/", 0).unwrap();
///
/// assert_eq!(apply(xor, 6.0, 3.0, 0), Ok(5.0));
/// assert_eq!(apply(divide, 1.0, 0.0, 0), Ok(f64::INFINITY));
/// assert!(matches!(apply(xor, 6.5, 3.0, 2),
///                  Err(RuntimeError::NonIntegralXorOperand { value, position: 2 }) if value == 6.5));
/// ```
pub fn apply(operator: Operator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    Ok(match operator.kind {
        OperatorKind::Add => left + right,
        OperatorKind::Subtract => left - right,
        OperatorKind::Multiply => left * right,
        OperatorKind::Divide => left / right,
        OperatorKind::Xor => {
            let integral = |value| {
                f64_to_i64_checked(value,
                                   RuntimeError::NonIntegralXorOperand { value, position })
            };
            i64_to_f64_rounded(integral(left)? ^ integral(right)?)
        },
        OperatorKind::Power => left.powf(right),
    })
}
