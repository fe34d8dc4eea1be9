use crate::interpreter::token::Token;

/// Joins tokens with single spaces.
///
/// Applied to a postfix sequence this produces the familiar RPN notation,
/// such as `2 3 4 * +`.
pub fn render_tokens(tokens: &[(Token, usize)]) -> String {
    tokens.iter()
          .map(|(token, _)| token.to_string())
          .collect::<Vec<_>>()
          .join(" ")
}

/// Rebuilds fully parenthesized infix text from a postfix sequence.
///
/// Every operator application is wrapped in parentheses, so the text parses
/// back to the same postfix order regardless of precedence. Negated values
/// are written as `(-x)`, which requires negation folding to read back.
///
/// Returns `None` if the sequence is not well formed: an operator without two
/// operands, a stray parenthesis, or anything other than one value left over.
///
/// # Example
/// ```
/// use shunting_yard::interpreter::{
///     converter::convert, lexer::Tokenizer, operator::OperatorTable, render::render_infix,
/// };
///
/// let table = OperatorTable::standard();
/// let rpn = convert(Tokenizer::new(&table).tokenize("2 + 3 xor 1 * (-4)").unwrap()).unwrap();
///
/// assert_eq!(render_infix(&rpn).as_deref(), Some("(2 + ((3 xor 1) * (-4)))"));
/// ```
pub fn render_infix(rpn: &[(Token, usize)]) -> Option<String> {
    let mut operands: Vec<String> = Vec::with_capacity(rpn.len());

    for (token, _) in rpn {
        match token {
            Token::Number(_) | Token::Function(_) => operands.push(token.to_string()),
            Token::Operator(operator) => {
                let right = operands.pop()?;
                let left = operands.pop()?;
                operands.push(format!("({left} {operator} {right})"));
            },
            Token::Brace(_) => return None,
        }
    }

    match <[String; 1]>::try_from(operands) {
        Ok([expression]) => Some(expression),
        Err(_) => None,
    }
}
