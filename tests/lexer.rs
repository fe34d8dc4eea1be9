use pretty_assertions::assert_eq;
use shunting_yard::{
    error::ParseError,
    interpreter::{
        lexer::Tokenizer,
        operator::{Associativity, OperatorKind, OperatorTable},
        resolver::TableResolver,
        token::{Tag, Token, TokenStream},
    },
};

fn texts(tokens: &TokenStream) -> Vec<String> {
    tokens.iter().map(|(token, _)| token.to_string()).collect()
}

fn positions(tokens: &TokenStream) -> Vec<usize> {
    tokens.iter().map(|(_, position)| *position).collect()
}

fn tokenize(src: &str) -> Result<TokenStream, ParseError> {
    let table = OperatorTable::standard();
    let builtins = TableResolver::with_builtins();
    Tokenizer::new(&table).with_resolver(&builtins).tokenize(src)
}

fn lexical_details(err: ParseError) -> (String, usize, String) {
    match err {
        ParseError::Lexical { token, position, details } => (token, position, details),
        other => panic!("expected a lexical error, got {other:?}"),
    }
}

#[test]
fn records_byte_positions() {
    let tokens = tokenize("12.5*(3)").unwrap();

    assert_eq!(texts(&tokens), ["12.5", "*", "(", "3", ")"]);
    assert_eq!(positions(&tokens), [0, 4, 5, 6, 7]);
}

#[test]
fn tags_follow_variants() {
    let tokens = tokenize("(1 + pi())").unwrap();
    let tags: Vec<Tag> = tokens.iter().map(|(token, _)| token.tag()).collect();

    assert_eq!(tags,
               [Tag::LeftBrace, Tag::Number, Tag::Operator, Tag::Function, Tag::RightBrace]);
}

#[test]
fn whitespace_is_skipped() {
    let tokens = tokenize(" \t2\n+\r\n3 ").unwrap();

    assert_eq!(texts(&tokens), ["2", "+", "3"]);
    assert_eq!(positions(&tokens), [2, 4, 7]);
}

#[test]
fn leading_and_trailing_points_are_numbers() {
    let tokens = tokenize(".5 + 2.").unwrap();

    assert_eq!(texts(&tokens), ["0.5", "+", "2"]);
}

#[test]
fn xor_is_a_word_operator() {
    let tokens = tokenize("6 xor 3").unwrap();

    assert!(matches!(&tokens[1], (Token::Operator(op), 2) if op.spelling == "xor"));
}

#[test]
fn unrecognized_character_is_lexical_error() {
    let (token, position, details) = lexical_details(tokenize("2 $ 3").unwrap_err());

    assert_eq!(token, "$");
    assert_eq!(position, 2);
    assert_eq!(details, "unrecognized character");
}

#[test]
fn malformed_number_is_lexical_error() {
    let (token, position, details) = lexical_details(tokenize("1 + 1.2.3").unwrap_err());

    assert_eq!(token, "1.2.3");
    assert_eq!(position, 4);
    assert_eq!(details, "malformed numeric literal");
}

#[test]
fn symbol_outside_table_is_lexical_error() {
    let (token, position, details) = lexical_details(tokenize("2 ^ 3").unwrap_err());

    assert_eq!(token, "^");
    assert_eq!(position, 2);
    assert_eq!(details, "unrecognized character");
}

#[test]
fn custom_table_symbols_are_operators() {
    let table = OperatorTable::builder().operator("^", OperatorKind::Power, 4, Associativity::Right)
                                        .build();
    let tokens = Tokenizer::new(&table).tokenize("2 ^ 3").unwrap();

    assert!(matches!(&tokens[1], (Token::Operator(op), 2) if op.kind == OperatorKind::Power));
}

#[test]
fn underscore_is_not_part_of_a_name() {
    let (token, position, details) = lexical_details(tokenize("my_fn()").unwrap_err());

    assert_eq!(token, "_");
    assert_eq!(position, 2);
    assert_eq!(details, "unrecognized character");
}

#[test]
fn unresolved_name_is_unknown_function() {
    assert_eq!(tokenize("1 + foo()").unwrap_err(),
               ParseError::UnknownFunction { name:     "foo".to_string(),
                                             position: 4, });
}

#[test]
fn function_name_needs_adjacent_parentheses() {
    let (_, position, details) = lexical_details(tokenize("pi").unwrap_err());
    assert_eq!(position, 0);
    assert_eq!(details, "no parentheses detected for pi() function");

    let (_, _, details) = lexical_details(tokenize("pi ()").unwrap_err());
    assert_eq!(details, "no parentheses detected for pi() function");
}

#[test]
fn function_arguments_are_rejected() {
    let (token, _, details) = lexical_details(tokenize("pi(2)").unwrap_err());

    assert_eq!(token, "pi");
    assert_eq!(details, "pi() takes no arguments");
}

#[test]
fn functions_disabled_without_resolver() {
    let table = OperatorTable::standard();
    let (_, _, details) =
        lexical_details(Tokenizer::new(&table).tokenize("2 * pi()").unwrap_err());

    assert_eq!(details, "function calls are disabled");
}

#[test]
fn negation_folds_into_number() {
    let tokens = tokenize("2 * (-3)").unwrap();

    assert_eq!(texts(&tokens), ["2", "*", "(-3)"]);
    assert_eq!(positions(&tokens), [0, 2, 4]);
    assert!(matches!(&tokens[2], (Token::Number(n), _) if n.is_negated() && n.value() == -3.0));
}

#[test]
fn negation_tolerates_inner_whitespace() {
    assert_eq!(texts(&tokenize("( - 5 )").unwrap()), ["(-5)"]);
}

#[test]
fn negation_folds_into_function() {
    let tokens = tokenize("1 - (-pi())").unwrap();

    assert_eq!(texts(&tokens), ["1", "-", "(-pi())"]);
    assert!(matches!(&tokens[2], (Token::Function(f), _) if f.is_negated()));
}

#[test]
fn negation_keeps_parentheses_around_longer_groups() {
    let tokens = tokenize("(-2 + 3)").unwrap();

    assert_eq!(texts(&tokens), ["(", "(-2)", "+", "3", ")"]);
    assert_eq!(positions(&tokens), [0, 2, 4, 6, 7]);
}

#[test]
fn negation_after_operand_is_left_alone() {
    let tokens = tokenize("3 (-2)").unwrap();

    assert_eq!(texts(&tokens), ["3", "(", "-", "2", ")"]);
}

#[test]
fn negation_before_brace_is_rejected() {
    let (token, position, details) = lexical_details(tokenize("(-)").unwrap_err());

    assert_eq!(token, ")");
    assert_eq!(position, 2);
    assert_eq!(details, "minus sign before unallowed token");
}

#[test]
fn negation_at_end_of_input_is_rejected() {
    let (token, position, details) = lexical_details(tokenize("1 + (-").unwrap_err());

    assert_eq!(token, "-");
    assert_eq!(position, 5);
    assert_eq!(details, "minus sign at end of input");
}

#[test]
fn negation_folding_can_be_disabled() {
    let table = OperatorTable::standard();
    let tokens = Tokenizer::new(&table).with_negation_folding(false)
                                       .tokenize("(-5)")
                                       .unwrap();

    assert_eq!(texts(&tokens), ["(", "-", "5", ")"]);
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ").unwrap().is_empty());
}
