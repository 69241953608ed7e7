use crate::{ast::UnaryOperator, interpreter::value::Value};

/// Evaluates a unary operation on a value.
///
/// - `Plus` returns the value unchanged.
/// - `Minus` negates it, keeping its kind. The one integer without a
///   negation in range, `i64::MIN`, becomes a float.
///
/// # Example
/// ```
/// use sandcalc::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::Value},
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Minus, Value::Integer(5)),
///            Value::Integer(-5));
/// assert_eq!(eval_unary(UnaryOperator::Minus, Value::Float(0.5)),
///            Value::Float(-0.5));
/// assert_eq!(eval_unary(UnaryOperator::Plus, Value::Integer(7)),
///            Value::Integer(7));
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: Value) -> Value {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Minus => match value {
            Value::Integer(n) => n.checked_neg()
                                  .map_or_else(|| Value::Float(-value.as_f64()), Value::Integer),
            Value::Float(x) => Value::Float(-x),
        },
    }
}
