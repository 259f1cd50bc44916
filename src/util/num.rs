use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Promotes an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` round to the closest representable float, as in
/// any mixed integer/float arithmetic.
///
/// ## Example
/// ```
/// use pebble::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Compares an integer and a float by exact numeric value.
///
/// The float must be integral and within the `i64` range to be equal to any
/// integer; the comparison then happens on integers, so no precision is lost
/// for large values.
///
/// ## Example
/// ```
/// use pebble::util::num::int_eq_float;
///
/// assert!(int_eq_float(3, 3.0));
/// assert!(!int_eq_float(3, 3.5));
/// assert!(!int_eq_float(9_007_199_254_740_993, 9_007_199_254_740_992.0));
/// assert!(!int_eq_float(i64::MAX, 1.0));
/// assert!(!int_eq_float(0, f64::NAN));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn int_eq_float(int: i64, float: f64) -> bool {
    float.fract() == 0.0
    && float >= i64::MIN as f64
    && float < i64::MAX as f64
    && float as i64 == int
}

/// Converts a float to an integer count, truncating toward zero.
///
/// ## Errors
/// Returns `Err(RuntimeError::InvalidCount)` for non-finite values and values
/// outside the `i64` range.
///
/// ## Example
/// ```
/// use pebble::util::num::f64_to_count;
///
/// assert_eq!(f64_to_count(2.9).unwrap(), 2);
/// assert_eq!(f64_to_count(-1.5).unwrap(), -1);
/// assert!(f64_to_count(f64::NAN).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_count(value: f64) -> EvalResult<i64> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::InvalidCount { value });
    }
    Ok(truncated as i64)
}

/// Renders a float in its shortest round-trip decimal form.
///
/// Whole values keep a trailing `.0` so they never read as integers.
///
/// ## Example
/// ```
/// use pebble::util::num::format_float;
///
/// assert_eq!(format_float(3.0), "3.0");
/// assert_eq!(format_float(-3.5), "-3.5");
/// assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}
