use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::unsupported, core::EvalResult},
        value::core::Value,
    },
    util::num::int_eq_float,
};

/// Compares two values for equality.
///
/// Integers and floats compare by exact numeric value. Strings and booleans
/// are only comparable with their own type; any other pairing is a type error reported against `op`, never `false`.
///
/// # Example
/// ```
/// use pebble::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::equality::strict_eq, value::core::Value},
/// };
///
/// let three = Value::Integer(3);
/// assert!(strict_eq(BinaryOperator::Equal, &three, &Value::Float(3.0)).unwrap());
/// assert!(strict_eq(BinaryOperator::Equal, &three, &Value::from("3")).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn strict_eq(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<bool> {
    use Value::{Boolean, Float, Integer, String};

    match (left, right) {
        (Integer(a), Integer(b)) => Ok(a == b),
        (Integer(a), Float(b)) => Ok(int_eq_float(*a, *b)),
        (Float(a), Integer(b)) => Ok(int_eq_float(*b, *a)),
        (Float(a), Float(b)) => Ok(a == b),
        (String(a), String(b)) => Ok(a == b),
        (Boolean(a), Boolean(b)) => Ok(a == b),
        _ => Err(unsupported(op, left, right)),
    }
}
