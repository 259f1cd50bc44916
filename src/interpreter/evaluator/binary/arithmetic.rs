use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::unsupported, core::EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// Evaluates a numeric arithmetic operation.
///
/// Two integers produce an integer; as soon as either side is a float the
/// integer side is promoted and the result is a float. Integer arithmetic is
/// checked for overflow and division by zero is reported for both integer
/// and float divisors. Equality operators are not arithmetic and are
/// rejected as a type error.
///
/// # Example
/// ```
/// use pebble::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::eval_numeric, value::core::Value},
/// };
///
/// let x = Value::Float(1.5);
/// let y = Value::Integer(2);
///
/// let result = eval_numeric(BinaryOperator::Mul, &x, &y).unwrap();
/// assert_eq!(result, Value::Float(3.0));
/// ```
pub fn eval_numeric(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Equal, Mul, NotEqual, Sub};
    use Value::{Float, Integer};

    let (a, b) = match (left, right) {
        (Integer(a), Integer(b)) => {
            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                Div => {
                    if *b == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    a.checked_div(*b)
                },
                Equal | NotEqual => return Err(unsupported(op, left, right)),
            };
            return result.map(Integer).ok_or(RuntimeError::Overflow { op });
        },
        (Integer(a), Float(b)) => (i64_to_f64(*a), *b),
        (Float(a), Integer(b)) => (*a, i64_to_f64(*b)),
        (Float(a), Float(b)) => (*a, *b),
        _ => return Err(unsupported(op, left, right)),
    };

    Ok(Float(match op {
                 Add => a + b,
                 Sub => a - b,
                 Mul => a * b,
                 Div => {
                     if b == 0.0 {
                         return Err(RuntimeError::DivisionByZero);
                     }
                     a / b
                 },
                 Equal | NotEqual => return Err(unsupported(op, left, right)),
             }))
}
