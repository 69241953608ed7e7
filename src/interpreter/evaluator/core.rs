use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// The walk has one case per node kind. For binary operations the left
/// operand is fully evaluated before the right one, so when both sides fail
/// the leftmost failure is reported. Evaluation stops at the first failure;
/// no partial result is produced.
///
/// The evaluator keeps no state between calls, and the tree is only read.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] if any division has a zero
/// divisor.
///
/// # Example
/// ```
/// use sandcalc::{
///     Limits,
///     interpreter::{evaluator::core::evaluate, parser::core::parse, value::Value},
/// };
///
/// let expr = parse("(2 + 3) * 4", &Limits::default()).unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), Value::Integer(20));
///
/// let expr = parse("1 / (2 - 2)", &Limits::default()).unwrap();
/// assert!(evaluate(&expr).is_err());
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::UnaryOp { op, expr, .. } => {
            let value = evaluate(expr)?;
            Ok(eval_unary(*op, value))
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right, *position)
        },
    }
}
