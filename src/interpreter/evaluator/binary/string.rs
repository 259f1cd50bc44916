use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::unsupported, core::EvalResult},
        value::core::Value,
    },
    util::num::{f64_to_count, format_float},
};

/// Appends the rendered right operand to `left`.
///
/// Integers and floats are appended in their display form; booleans are
/// rejected.
pub fn concat(left: &str, right: &Value) -> EvalResult<Value> {
    match right {
        Value::Integer(n) => Ok(Value::String(format!("{left}{n}"))),
        Value::Float(r) => Ok(Value::String(format!("{left}{}", format_float(*r)))),
        Value::String(s) => Ok(Value::String(format!("{left}{s}"))),
        Value::Boolean(_) => Err(unsupported(BinaryOperator::Add, &Value::from(left), right)),
    }
}

/// Removes the last `right` characters of `left`.
///
/// A float count is truncated toward zero. A negative count leaves the
/// string unchanged.
///
/// # Errors
/// Fails with [`RuntimeError::TruncationOutOfRange`] if the count exceeds
/// the length of the string.
///
/// # Example
/// ```
/// use pebble::interpreter::{evaluator::binary::string::truncate, value::core::Value};
///
/// assert_eq!(truncate("hello", &Value::Integer(2)).unwrap(), Value::from("hel"));
/// assert!(truncate("hi", &Value::Integer(5)).is_err());
/// ```
pub fn truncate(left: &str, right: &Value) -> EvalResult<Value> {
    let count = count_operand(BinaryOperator::Sub, left, right)?;
    let length = left.chars().count();

    let Ok(remove) = usize::try_from(count) else {
        return Ok(Value::String(left.to_string()));
    };
    if remove > length {
        return Err(RuntimeError::TruncationOutOfRange { count, length });
    }

    Ok(Value::String(left.chars().take(length - remove).collect()))
}

/// Repeats `left` as many times as `right` says.
///
/// A float count is truncated toward zero; counts of zero or less produce
/// the empty string.
///
/// # Errors
/// Fails with [`RuntimeError::Overflow`] if memory for the result cannot be
/// reserved.
pub fn repeat(left: &str, right: &Value) -> EvalResult<Value> {
    let count = count_operand(BinaryOperator::Mul, left, right)?;

    let Ok(times) = usize::try_from(count) else {
        return Ok(Value::String(String::new()));
    };
    if left.is_empty() {
        return Ok(Value::String(String::new()));
    }

    let mut repeated = String::new();
    if left.len().checked_mul(times).is_none_or(|size| repeated.try_reserve_exact(size).is_err()) {
        return Err(RuntimeError::Overflow { op: BinaryOperator::Mul });
    }
    repeated.extend(std::iter::repeat_n(left, times));

    Ok(Value::String(repeated))
}

/// Reads the numeric right operand of a string operation as a count.
fn count_operand(op: BinaryOperator, left: &str, right: &Value) -> EvalResult<i64> {
    match right {
        Value::Integer(n) => Ok(*n),
        Value::Float(r) => f64_to_count(*r),
        Value::String(_) | Value::Boolean(_) => Err(unsupported(op, &Value::from(left), right)),
    }
}
