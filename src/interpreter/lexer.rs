use std::{iter::Peekable, ops::Range};

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        operator::{OperatorKind, OperatorTable},
        render::render_tokens,
        resolver::FunctionResolver,
        token::{Brace, Function, Number, Token, TokenStream},
    },
};

/// Result type used by the tokenizer and the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Raw lexical classes recognized before any table lookup.
///
/// The scanner only decides where a lexeme starts and ends. Whether a symbol
/// or word is an operator is up to the [`OperatorTable`] the tokenizer was
/// built with.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Runs of digits and decimal points, such as `3.14`, `.5` or `2.`.
    #[regex(r"[0-9.]+")]
    Numeral,
    /// Alphabetic runs: operator words like `xor`, or function names.
    #[regex(r"[A-Za-z]+")]
    Word,
    /// A single operator-like punctuation character.
    #[regex(r"[+\-*/^%&|!~<>=]")]
    Symbol,
}

/// Converts an expression string into tokens.
///
/// # Example
/// ```
/// use shunting_yard::interpreter::{lexer::Tokenizer, operator::OperatorTable};
///
/// let table = OperatorTable::standard();
/// let tokens = Tokenizer::new(&table).tokenize("2 + 3 xor 1").unwrap();
/// let text: Vec<String> = tokens.iter().map(|(token, _)| token.to_string()).collect();
///
/// assert_eq!(text, ["2", "+", "3", "xor", "1"]);
/// assert_eq!(tokens[3].1, 6);
/// ```
#[derive(Clone, Copy)]
pub struct Tokenizer<'a> {
    table:         &'a OperatorTable,
    resolver:      Option<&'a dyn FunctionResolver>,
    fold_negation: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer with negation folding enabled and function calls
    /// disabled.
    #[must_use]
    pub const fn new(table: &'a OperatorTable) -> Self {
        Self { table,
               resolver: None,
               fold_negation: true }
    }

    /// Enables function calls, binding every name through `resolver`.
    #[must_use]
    pub const fn with_resolver(mut self, resolver: &'a dyn FunctionResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Turns unary-minus folding on or off.
    #[must_use]
    pub const fn with_negation_folding(mut self, enabled: bool) -> Self {
        self.fold_negation = enabled;
        self
    }

    /// Scans `source` left to right and produces the token stream.
    ///
    /// # Errors
    /// - [`ParseError::Lexical`] for characters that are neither whitespace,
    ///   digits, letters, parentheses nor an operator spelling of the table,
    ///   and for malformed numbers, names without `()` and misplaced unary
    ///   minus signs.
    /// - [`ParseError::UnknownFunction`] for names the resolver cannot bind.
    pub fn tokenize(&self, source: &str) -> ParseResult<TokenStream> {
        let lexemes = scan(source)?;
        let mut tokens = Vec::with_capacity(lexemes.len());
        let mut lexemes = lexemes.into_iter().peekable();

        while let Some((lexeme, span)) = lexemes.next() {
            let text = &source[span.clone()];
            let position = span.start;

            let token = match lexeme {
                Lexeme::LParen => Token::Brace(Brace::Left),
                Lexeme::RParen => Token::Brace(Brace::Right),
                Lexeme::Numeral => Token::Number(parse_number(text, position)?),
                Lexeme::Symbol if self.table.contains(text) => {
                    Token::Operator(self.table.lookup(text, position)?)
                },
                Lexeme::Symbol => {
                    return Err(ParseError::lexical(text, position, "unrecognized character"));
                },
                Lexeme::Word if self.table.contains(text) => {
                    Token::Operator(self.table.lookup(text, position)?)
                },
                Lexeme::Word => Token::Function(self.function_call(text, &span, &mut lexemes)?),
            };
            tokens.push((token, position));
        }

        tracing::debug!(tokens = %render_tokens(&tokens), "tokenized");

        if self.fold_negation {
            let folded = fold_negation(tokens)?;
            tracing::debug!(tokens = %render_tokens(&folded), "folded unary minus");
            Ok(folded)
        } else {
            Ok(tokens)
        }
    }

    /// Consumes the `()` after a function name and binds the name.
    fn function_call<I>(&self,
                        name: &str,
                        span: &Range<usize>,
                        lexemes: &mut Peekable<I>)
                        -> ParseResult<Function>
        where I: Iterator<Item = (Lexeme, Range<usize>)>
    {
        let Some(resolver) = self.resolver else {
            return Err(ParseError::lexical(name, span.start, "function calls are disabled"));
        };

        let Some((_, open)) =
            lexemes.next_if(|(lexeme, open)| *lexeme == Lexeme::LParen && open.start == span.end)
        else {
            return Err(ParseError::lexical(name,
                                           span.start,
                                           format!("no parentheses detected for {name}() function")));
        };

        if lexemes.next_if(|(lexeme, close)| *lexeme == Lexeme::RParen && close.start == open.end)
                  .is_none()
        {
            return Err(ParseError::lexical(name,
                                           span.start,
                                           format!("{name}() takes no arguments")));
        }

        Function::resolve(name, resolver, span.start)
    }
}

/// Splits the source into raw lexemes, rejecting unknown characters.
fn scan(source: &str) -> ParseResult<Vec<(Lexeme, Range<usize>)>> {
    Lexeme::lexer(source).spanned()
                         .map(|(lexeme, span)| match lexeme {
                             Ok(lexeme) => Ok((lexeme, span)),
                             Err(()) => Err(ParseError::lexical(&source[span.clone()],
                                                                span.start,
                                                                "unrecognized character")),
                         })
                         .collect()
}

/// Parses a run of digits and decimal points.
fn parse_number(text: &str, position: usize) -> ParseResult<Number> {
    let malformed = || ParseError::lexical(text, position, "malformed numeric literal");

    if text.matches('.').count() > 1 {
        return Err(malformed());
    }
    text.parse::<f64>().map(Number::new).map_err(|_| malformed())
}

/// Folds a unary minus into the literal or call that follows it.
///
/// A `-` directly after a `(` that does not follow an operand is merged with
/// the next number or function into one negated token. If that token is the
/// whole content of the parentheses, the parentheses are dropped as well:
/// `2 * (-3)` becomes `2 * -3` with `-3` a single number token.
///
/// # Errors
/// Returns [`ParseError::Lexical`] if the minus sign is followed by anything
/// other than a number or function call.
///
/// # Example
/// ```
/// use shunting_yard::interpreter::{lexer::Tokenizer, operator::OperatorTable};
///
/// let table = OperatorTable::standard();
/// let tokens = Tokenizer::new(&table).tokenize("2 * (-3)").unwrap();
/// let text: Vec<String> = tokens.iter().map(|(token, _)| token.to_string()).collect();
///
/// assert_eq!(text, ["2", "*", "(-3)"]);
/// ```
pub fn fold_negation(tokens: TokenStream) -> ParseResult<TokenStream> {
    let mut folded: TokenStream = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter().peekable();

    while let Some((token, position)) = tokens.next() {
        let opens_negation =
            token == Token::Brace(Brace::Left)
            && !folded.last().is_some_and(|(previous, _)| previous.ends_operand())
            && matches!(tokens.peek(),
                        Some((Token::Operator(op), _)) if op.kind == OperatorKind::Subtract);

        if !opens_negation {
            folded.push((token, position));
            continue;
        }

        let minus_position = tokens.next().map_or(position, |(_, p)| p);
        let (operand, operand_position) = match tokens.next() {
            Some((Token::Number(mut number), p)) => {
                number.negate();
                (Token::Number(number), p)
            },
            Some((Token::Function(mut function), p)) => {
                function.negate();
                (Token::Function(function), p)
            },
            Some((other, p)) => {
                return Err(ParseError::lexical(other.to_string(),
                                               p,
                                               "minus sign before unallowed token"));
            },
            None => {
                return Err(ParseError::lexical("-",
                                               minus_position,
                                               "minus sign at end of input"));
            },
        };

        if tokens.next_if(|(next, _)| *next == Token::Brace(Brace::Right)).is_some() {
            folded.push((operand, position));
        } else {
            folded.push((token, position));
            folded.push((operand, operand_position));
        }
    }

    Ok(folded)
}
