/// The calculator module wires the pipeline stages together.
///
/// It owns the operator table reference, the enabled capabilities and the
/// function resolver, and exposes one-call entry points for evaluating an
/// expression or stopping after conversion to postfix.
pub mod calculator;
/// The converter module reorders tokens into postfix order.
///
/// Implements the shunting-yard algorithm over the token stream, resolving
/// precedence and associativity through the operator definitions carried by
/// each token.
///
/// # Responsibilities
/// - Emits operands in source order and operators by binding strength.
/// - Discards parentheses once their grouping has been applied.
/// - Reports unbalanced parentheses.
pub mod converter;
/// The evaluator module reduces a postfix sequence to a number.
///
/// # Responsibilities
/// - Applies the arithmetic and bitwise operators.
/// - Invokes function bindings and applies their negation marker.
/// - Reports operators with missing operands and leftover values.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, operators, parentheses and function calls. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Classifies operator spellings through the operator table.
/// - Binds function names through the configured resolver.
/// - Folds unary minus signs into the following operand.
/// - Reports lexical errors with the offending text and its position.
pub mod lexer;
/// The operator module defines the operator registry.
///
/// Maps each spelling to its operation, precedence and associativity. The
/// standard table is built once per process and never changes.
pub mod operator;
/// Text rendering of token sequences.
pub mod render;
/// Function resolution.
///
/// Everything that can turn a function name into a callable binding.
pub mod resolver;
/// The token module defines the values flowing between stages.
pub mod token;
