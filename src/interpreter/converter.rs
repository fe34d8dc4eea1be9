use crate::{
    error::ParseError,
    interpreter::{
        lexer::ParseResult,
        operator::Operator,
        render::render_tokens,
        token::{Brace, Token, TokenStream},
    },
};

/// Reorders an infix token stream into postfix (RPN) order.
///
/// Numbers go straight to the output. Functions and `(` wait on an operator
/// stack. An incoming operator first flushes every pending function and
/// every pending operator that binds tighter, or equally tight and
/// left-associative. `)` flushes up to the matching `(`, which is discarded.
/// Whatever is left on the stack is flushed at the end.
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] when two operands, or an operator and a
///   `)`, follow each other directly, as in `2 3 +` or `2(-3)`.
/// - [`ParseError::GroupingMismatch`] for a `)` without a matching `(`, and
///   for a `(` that is never closed.
///
/// # Example
/// ```
/// use shunting_yard::interpreter::{
///     converter::convert, lexer::Tokenizer, operator::OperatorTable, render::render_tokens,
/// };
///
/// let table = OperatorTable::standard();
/// let tokens = Tokenizer::new(&table).tokenize("(2 + 3) * 4 - 8 / 2").unwrap();
///
/// assert_eq!(render_tokens(&convert(tokens).unwrap()), "2 3 + 4 * 8 2 / -");
/// ```
pub fn convert(tokens: TokenStream) -> ParseResult<TokenStream> {
    let mut output: TokenStream = Vec::with_capacity(tokens.len());
    let mut stack: TokenStream = Vec::new();
    let mut expect_operand = true;

    for (token, position) in tokens {
        expect_operand = check_order(&token, position, expect_operand)?;

        match token {
            Token::Number(_) => output.push((token, position)),
            Token::Function(_) | Token::Brace(Brace::Left) => stack.push((token, position)),
            Token::Operator(incoming) => {
                while let Some((top, _)) = stack.last()
                      && must_pop(top, &incoming)
                {
                    output.extend(stack.pop());
                }
                tracing::trace!(operator = %incoming, position, "push");
                stack.push((token, position));
            },
            Token::Brace(Brace::Right) => loop {
                match stack.pop() {
                    Some((Token::Brace(Brace::Left), _)) => break,
                    Some(pending) => output.push(pending),
                    None => {
                        return Err(ParseError::GroupingMismatch { position,
                                                                  details:
                                                                      "')' has no matching '('" });
                    },
                }
            },
        }
    }

    while let Some((token, position)) = stack.pop() {
        if token == Token::Brace(Brace::Left) {
            return Err(ParseError::GroupingMismatch { position,
                                                      details: "'(' is never closed" });
        }
        output.push((token, position));
    }

    tracing::debug!(rpn = %render_tokens(&output), "converted to postfix");
    Ok(output)
}

/// Checks that operands and operators alternate and returns whether the
/// token after `token` has to start an operand.
///
/// An operand or `(` may only appear where an operand is expected, and an
/// operator or `)` only after a complete operand. A trailing operator is
/// left for the evaluator to report.
fn check_order(token: &Token, position: usize, expect_operand: bool) -> ParseResult<bool> {
    let (wants_operand, next) = match token {
        Token::Number(_) | Token::Function(_) => (true, false),
        Token::Brace(Brace::Left) => (true, true),
        Token::Operator(_) => (false, true),
        Token::Brace(Brace::Right) => (false, false),
    };

    if wants_operand == expect_operand {
        Ok(next)
    } else {
        Err(ParseError::UnexpectedToken { token: token.to_string(),
                                          position,
                                          expected: if expect_operand {
                                              "an operand"
                                          } else {
                                              "an operator"
                                          } })
    }
}

/// Decides whether the stack top has to be emitted before `incoming` is
/// pushed.
fn must_pop(top: &Token, incoming: &Operator) -> bool {
    match top {
        Token::Function(_) => true,
        Token::Operator(pending) => pending.yields_to(incoming),
        Token::Number(_) | Token::Brace(_) => false,
    }
}
