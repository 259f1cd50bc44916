use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operator was applied to an unsupported pair of value types.
    TypeError {
        /// The operator that was applied.
        op:    BinaryOperator,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// Tried to remove more characters from a string than it holds.
    TruncationOutOfRange {
        /// The number of characters to remove.
        count:  i64,
        /// The length of the string in characters.
        length: usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow {
        /// The operator whose result did not fit.
        op: BinaryOperator,
    },
    /// A float could not be used as a character count.
    InvalidCount {
        /// The offending float.
        value: f64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { op, left, right } => {
                write!(f, "Type error: Cannot use {op} on {left} and {right}.")
            },
            Self::TruncationOutOfRange { count, length } => write!(f,
                                                                    "Cannot remove {count} characters from a string of length {length}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow { op } => {
                write!(f, "Integer overflow while trying to compute result of {op}.")
            },
            Self::InvalidCount { value } => {
                write!(f, "Value {value} cannot be used as a character count.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
