//! # shunting-yard
//!
//! shunting-yard is an arithmetic expression evaluator written in Rust.
//! Expressions are tokenized, reordered into postfix (Reverse Polish)
//! notation with the shunting-yard algorithm, and reduced on a stack to a
//! single number.
//!
//! ```text
//! "2 + 3 * 4" --> [2, +, 3, *, 4] --> [2, 3, 4, *, +] --> 14
//!             tokenize          convert            evaluate
//! ```
//!
//! Supported input: decimal numbers, `+ - * /`, `xor` on integral values,
//! parentheses, negative operands written as `(-x)`, and zero-argument
//! function calls such as `pi()`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Pipeline configuration.
///
/// Declares the optional capabilities (function calls, unary-minus folding)
/// and the library directories a calculator is built from. One binary
/// supports every combination; nothing is selected at compile time.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting or evaluating an expression, and while loading function
/// libraries. Every error carries enough context (offending text, byte
/// position) to produce a single diagnostic.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Wraps them in [`Error`](error::Error) for the pipeline entry points.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the token model, the operator table, the
/// tokenizer, the converter, the evaluator and function resolution.
///
/// # Responsibilities
/// - Coordinates the three stages and hands token sequences between them.
/// - Provides entry points for evaluating expressions or producing RPN.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

use crate::{error::Error, interpreter::calculator::Calculator};

/// Evaluates an expression with the default configuration.
///
/// Uses the standard operator table, enables function calls and unary-minus
/// folding, and resolves functions against the built-ins only.
///
/// # Errors
/// Returns an error if tokenizing, conversion or evaluation fails.
///
/// # Examples
/// ```
/// use shunting_yard::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("8 - 4 - 2").unwrap(), 2.0);
/// assert_eq!(evaluate("6 xor 3").unwrap(), 5.0);
///
/// // Unknown function: no numeric output.
/// assert!(evaluate("foo()").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    Calculator::new().evaluate(source)
}
