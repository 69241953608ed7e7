//! # sandcalc
//!
//! sandcalc is a sandboxed arithmetic expression evaluator written in Rust.
//! It accepts numbers, `+`, `-`, `*`, `/` and parentheses, and nothing else:
//! the grammar is closed, so there is no input that can make it do anything
//! but arithmetic.
//!
//! ```
//! use sandcalc::{evaluate_expression, interpreter::value::Value};
//!
//! assert_eq!(evaluate_expression("2 + 3*4").unwrap(), Value::Integer(14));
//! assert_eq!(evaluate_expression("7 / 2").unwrap(), Value::Float(3.5));
//! assert!(evaluate_expression("__import__('os')").is_err());
//! ```

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
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{EvaluatorError, ParseError, RuntimeError},
    interpreter::value::Value,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the closed `Expr` enum and the operator enums that
/// make up an expression tree. The tree is built by the parser and traversed
/// by the evaluator.
///
/// # Responsibilities
/// - Defines the three node kinds: numbers, unary and binary operations.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Attaches source positions and readable messages.
/// - Classifies failures for callers through [`error::ErrorKind`].
pub mod error;
/// Result presentation policies for callers.
pub mod format;
/// Ties lexing, parsing, evaluation and values together.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Exposes each phase for callers that need them separately.
pub mod interpreter;
/// Resource limits.
pub mod limits;
/// The interactive read-evaluate-print loop.
pub mod repl;

pub use limits::Limits;

/// Parses and evaluates an arithmetic expression with default limits.
///
/// This is the main entry point. It keeps no state, so it can be called
/// repeatedly or from several threads at once, and the same input always
/// gives the same result.
///
/// # Errors
/// - [`EvaluatorError::Parse`] if the text is not a valid arithmetic
///   expression or nests too deeply. Nothing is evaluated in that case.
/// - [`EvaluatorError::Runtime`] if evaluation divides by zero.
///
/// # Examples
/// ```
/// use sandcalc::{error::ErrorKind, evaluate_expression, interpreter::value::Value};
///
/// assert_eq!(evaluate_expression("(2 + 3) * 4").unwrap(), Value::Integer(20));
/// assert_eq!(evaluate_expression("3 - -4").unwrap(), Value::Integer(7));
///
/// let err = evaluate_expression("(1 + 2").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// assert_eq!(err.position(), Some(0));
/// ```
pub fn evaluate_expression(source: &str) -> Result<Value, EvaluatorError> {
    evaluate_expression_with(source, &Limits::default())
}

/// Parses and evaluates an arithmetic expression with explicit limits.
///
/// # Errors
/// Same as [`evaluate_expression`].
pub fn evaluate_expression_with(source: &str, limits: &Limits) -> Result<Value, EvaluatorError> {
    let expr = parse_with(source, limits)?;
    Ok(evaluate(&expr)?)
}

/// Parses an expression with default limits without evaluating it.
///
/// # Errors
/// Returns a [`ParseError`] for anything outside the grammar.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with(source, &Limits::default())
}

/// Parses an expression with explicit limits without evaluating it.
///
/// # Errors
/// Returns a [`ParseError`] for anything outside the grammar or beyond
/// `limits`.
pub fn parse_with(source: &str, limits: &Limits) -> Result<Expr, ParseError> {
    interpreter::parser::core::parse(source, limits)
}

/// Evaluates an already parsed expression tree.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] if a divisor is zero.
pub fn evaluate(expr: &Expr) -> Result<Value, RuntimeError> {
    interpreter::evaluator::core::evaluate(expr)
}
