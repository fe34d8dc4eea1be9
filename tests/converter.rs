use pretty_assertions::assert_eq;
use shunting_yard::{
    error::ParseError,
    interpreter::{
        converter::convert,
        lexer::Tokenizer,
        operator::{Associativity, OperatorKind, OperatorTable},
        render::render_tokens,
        resolver::TableResolver,
    },
};

fn rpn_with(table: &OperatorTable, src: &str) -> Result<String, ParseError> {
    let builtins = TableResolver::with_builtins();
    let tokens = Tokenizer::new(table).with_resolver(&builtins).tokenize(src)?;
    convert(tokens).map(|rpn| render_tokens(&rpn))
}

fn rpn(src: &str) -> Result<String, ParseError> {
    rpn_with(&OperatorTable::standard(), src)
}

fn power_table() -> OperatorTable {
    OperatorTable::builder().operator("+", OperatorKind::Add, 1, Associativity::Left)
                            .operator("-", OperatorKind::Subtract, 1, Associativity::Left)
                            .operator("*", OperatorKind::Multiply, 2, Associativity::Left)
                            .operator("^", OperatorKind::Power, 4, Associativity::Right)
                            .build()
}

#[test]
fn higher_precedence_binds_tighter() {
    assert_eq!(rpn("2 + 3 * 4").unwrap(), "2 3 4 * +");
    assert_eq!(rpn("2 * 3 + 4").unwrap(), "2 3 * 4 +");
}

#[test]
fn equal_precedence_is_left_associative() {
    assert_eq!(rpn("8 - 4 - 2").unwrap(), "8 4 - 2 -");
    assert_eq!(rpn("16 / 4 * 2").unwrap(), "16 4 / 2 *");
}

#[test]
fn xor_binds_tighter_than_arithmetic() {
    assert_eq!(rpn("2 + 3 xor 1").unwrap(), "2 3 1 xor +");
    assert_eq!(rpn("2 * 3 xor 1").unwrap(), "2 3 1 xor *");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(rpn("(2 + 3) * 4").unwrap(), "2 3 + 4 *");
    assert_eq!(rpn("((1 + 2) * (3 - 4))").unwrap(), "1 2 + 3 4 - *");
}

#[test]
fn right_associative_operators_group_rightwards() {
    let table = power_table();

    assert_eq!(rpn_with(&table, "2 ^ 3 ^ 2").unwrap(), "2 3 2 ^ ^");
    assert_eq!(rpn_with(&table, "2 * 3 ^ 2").unwrap(), "2 3 2 ^ *");
}

#[test]
fn functions_are_emitted_as_operands() {
    assert_eq!(rpn("2 * pi()").unwrap(), "2 pi() *");
    assert_eq!(rpn("pi() * 2").unwrap(), "pi() 2 *");
    assert_eq!(rpn("(-e()) + 1").unwrap(), "(-e()) 1 +");
}

#[test]
fn negated_literals_stay_single_operands() {
    assert_eq!(rpn("2 * (-3)").unwrap(), "2 (-3) *");
    assert_eq!(rpn("(-2 + 3) * 4").unwrap(), "(-2) 3 + 4 *");
}

#[test]
fn positions_survive_reordering() {
    let table = OperatorTable::standard();
    let rpn = convert(Tokenizer::new(&table).tokenize("2 + 3").unwrap()).unwrap();
    let positions: Vec<usize> = rpn.iter().map(|(_, position)| *position).collect();

    assert_eq!(positions, [0, 4, 2]);
}

#[test]
fn unclosed_left_brace_is_mismatch() {
    assert_eq!(rpn("(2 + 3").unwrap_err(),
               ParseError::GroupingMismatch { position: 0,
                                              details:  "'(' is never closed", });
}

#[test]
fn stray_right_brace_is_mismatch() {
    assert_eq!(rpn("2 + 3)").unwrap_err(),
               ParseError::GroupingMismatch { position: 5,
                                              details:  "')' has no matching '('", });
}

#[test]
fn empty_input_converts_to_nothing() {
    assert_eq!(rpn("").unwrap(), "");
}

fn unexpected(src: &str) -> (String, usize, &'static str) {
    match rpn(src).unwrap_err() {
        ParseError::UnexpectedToken { token, position, expected } => (token, position, expected),
        other => panic!("expected an unexpected-token error, got {other:?}"),
    }
}

#[test]
fn prefix_operator_is_rejected() {
    assert_eq!(unexpected("+ 2 3"), ("+".to_string(), 0, "an operand"));
    assert_eq!(unexpected("2 * * 3"), ("*".to_string(), 4, "an operand"));
}

#[test]
fn postfix_operator_is_rejected() {
    assert_eq!(unexpected("2 3 +"), ("3".to_string(), 2, "an operator"));
}

#[test]
fn juxtaposed_operands_are_rejected() {
    assert_eq!(unexpected("2(-3)"), ("(".to_string(), 1, "an operator"));
    assert_eq!(unexpected("(-3)(-4)"), ("(".to_string(), 4, "an operator"));
    assert_eq!(unexpected("pi() 2"), ("2".to_string(), 5, "an operator"));
}

#[test]
fn empty_group_is_rejected() {
    assert_eq!(unexpected("()"), (")".to_string(), 1, "an operand"));
    assert_eq!(unexpected("(2 +)"), (")".to_string(), 4, "an operand"));
}

#[test]
fn trailing_operator_is_left_to_evaluation() {
    assert_eq!(rpn("2 +").unwrap(), "2 +");
}
