use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary arithmetic operation.
///
/// Promotion rules:
/// - `Add`, `Sub` and `Mul` on two integers stay integer as long as the
///   exact result fits in `i64`. Otherwise the operation is redone in `f64`.
/// - `Div` is true division and always yields a float.
/// - Any operation involving a float yields a float.
///
/// A divisor equal to zero (`0`, `0.0` or `-0.0`) is an error; the result
/// is never replaced by `inf` or `nan`. A zero dividend is fine.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] for a zero divisor.
///
/// # Example
/// ```
/// use sandcalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), 0);
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let quotient = eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), 0);
/// assert_eq!(quotient.unwrap(), Value::Float(3.5));
///
/// let err = eval_binary(BinaryOperator::Div, Value::Integer(1), Value::Float(0.0), 0);
/// assert!(err.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Value,
                   right: Value,
                   position: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::{Float, Integer};

    match op {
        Div => {
            if right.is_zero() {
                return Err(RuntimeError::DivisionByZero { position });
            }
            let (l, r) = left.promote_to_float(right);
            Ok(Float(l / r))
        },
        Add | Sub | Mul => match (left, right) {
            (Integer(a), Integer(b)) => {
                Ok(checked_integer(op, a, b).map_or_else(|| {
                                                 Float(eval_float(op, left.as_f64(), right.as_f64()))
                                             },
                                             Integer))
            },
            (Float(_), _) | (_, Float(_)) => {
                let (l, r) = left.promote_to_float(right);
                Ok(Float(eval_float(op, l, r)))
            },
        },
    }
}

/// Applies an operator to two integers, or `None` if the result is not an
/// exact `i64`. Division never is.
const fn checked_integer(op: BinaryOperator, left: i64, right: i64) -> Option<i64> {
    match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => None,
    }
}

/// Applies an operator to two floats.
fn eval_float(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}
