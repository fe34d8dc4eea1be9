use proptest::prelude::*;
use shunting_yard::interpreter::{
    calculator::Calculator,
    render::{render_infix, render_tokens},
};

const OPERATORS: &[&str] = &["+", "-", "*", "/", "xor"];

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..1000).prop_map(|n| n.to_string()),
                           (0u32..1000).prop_map(|n| format!("(-{n})")),
                           (0u32..100, 1u32..100).prop_map(|(i, f)| format!("{i}.{f}")),
                           Just("pi()".to_string()),
                           Just("(-e())".to_string()),];

    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(), proptest::sample::select(OPERATORS.to_vec()), inner.clone())
                            .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
                        inner.prop_map(|e| format!("({e})")),]
        })
}

proptest! {
    #[test]
    fn infix_rendering_reproduces_postfix(src in expression()) {
        let calculator = Calculator::new();
        let rpn = calculator.to_rpn(&src).unwrap();
        let rendered = render_infix(&rpn).unwrap();
        let reparsed = calculator.to_rpn(&rendered).unwrap();

        prop_assert_eq!(render_tokens(&rpn), render_tokens(&reparsed));
    }

    #[test]
    fn infix_rendering_preserves_value(src in expression()) {
        let calculator = Calculator::new();
        let rendered = render_infix(&calculator.to_rpn(&src).unwrap()).unwrap();

        match (calculator.evaluate(&src), calculator.evaluate(&rendered)) {
            (Ok(a), Ok(b)) => prop_assert!(a == b || (a.is_nan() && b.is_nan()),
                                           "{} = {}, but {} = {}", src, a, rendered, b),
            (Err(_), Err(_)) => {},
            (a, b) => prop_assert!(false, "{} gave {:?}, {} gave {:?}", src, a, rendered, b),
        }
    }

    #[test]
    fn arbitrary_ascii_never_panics(src in "[ -~]{0,24}") {
        let _ = Calculator::new().evaluate(&src);
    }
}
