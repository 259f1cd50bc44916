use crate::util::num::format_float;

/// Represents a runtime value in the interpreter.
///
/// Every expression reduces to exactly one of these variants. Values are
/// immutable; operators always build a new value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value (`true` or `false`).
    /// Produced by the equality operators.
    Boolean(bool),
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A text value. Lengths are counted in characters.
    String(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Returns the name of the value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use pebble::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Float(1.5).type_name(), "float");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{}", format_float(*r)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}
