use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::eval_numeric,
                equality::strict_eq,
                string::{concat, repeat, truncate},
            },
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Builds the error for an operator applied to an unsupported pair of
/// operand types.
#[must_use]
pub fn unsupported(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeError { op,
                              left: left.type_name(),
                              right: right.type_name() }
}

#[allow(clippy::should_implement_trait)]
impl Value {
    /// Applies a binary operator with `self` as the left operand.
    ///
    /// The operator dispatches on the type of the left operand and then
    /// inspects the right one. Pairs without a rule fail with
    /// [`RuntimeError::TypeError`]; nothing is coerced implicitly beyond
    /// integer to float promotion in numeric operations.
    ///
    /// # Example
    /// ```
    /// use pebble::{ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Float(0.5);
    ///
    /// let result = left.apply(BinaryOperator::Add, &right);
    /// assert_eq!(result.unwrap(), Value::Float(3.5));
    /// ```
    pub fn apply(&self, op: BinaryOperator, right: &Self) -> EvalResult<Self> {
        match op {
            BinaryOperator::Equal => self.equals(right),
            BinaryOperator::NotEqual => self.not_equals(right),
            BinaryOperator::Add => self.add(right),
            BinaryOperator::Sub => self.sub(right),
            BinaryOperator::Mul => self.mul(right),
            BinaryOperator::Div => self.div(right),
        }
    }

    /// `==`: numbers compare by value across integer and float, strings and
    /// booleans only against their own type.
    pub fn equals(&self, right: &Self) -> EvalResult<Self> {
        Ok(Self::Boolean(strict_eq(BinaryOperator::Equal, self, right)?))
    }

    /// `!=`: the negation of [`Value::equals`], failing whenever it fails.
    pub fn not_equals(&self, right: &Self) -> EvalResult<Self> {
        Ok(Self::Boolean(!strict_eq(BinaryOperator::NotEqual, self, right)?))
    }

    /// `+`: numeric addition, or string concatenation when the left operand
    /// is a string.
    pub fn add(&self, right: &Self) -> EvalResult<Self> {
        match self {
            Self::Integer(_) | Self::Float(_) => eval_numeric(BinaryOperator::Add, self, right),
            Self::String(s) => concat(s, right),
            Self::Boolean(_) => Err(unsupported(BinaryOperator::Add, self, right)),
        }
    }

    /// `-`: numeric subtraction, or removal of trailing characters when the
    /// left operand is a string.
    pub fn sub(&self, right: &Self) -> EvalResult<Self> {
        match self {
            Self::Integer(_) | Self::Float(_) => eval_numeric(BinaryOperator::Sub, self, right),
            Self::String(s) => truncate(s, right),
            Self::Boolean(_) => Err(unsupported(BinaryOperator::Sub, self, right)),
        }
    }

    /// `*`: numeric multiplication, or repetition when the left operand is a
    /// string.
    pub fn mul(&self, right: &Self) -> EvalResult<Self> {
        match self {
            Self::Integer(_) | Self::Float(_) => eval_numeric(BinaryOperator::Mul, self, right),
            Self::String(s) => repeat(s, right),
            Self::Boolean(_) => Err(unsupported(BinaryOperator::Mul, self, right)),
        }
    }

    /// `/`: numeric division. Integer division truncates toward zero.
    pub fn div(&self, right: &Self) -> EvalResult<Self> {
        match self {
            Self::Integer(_) | Self::Float(_) => eval_numeric(BinaryOperator::Div, self, right),
            Self::String(_) | Self::Boolean(_) => {
                Err(unsupported(BinaryOperator::Div, self, right))
            },
        }
    }
}
