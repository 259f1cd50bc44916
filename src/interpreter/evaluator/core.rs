use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the expression and returns the resulting value.
    ///
    /// Literals evaluate to themselves, variables force the node they wrap
    /// and binary operations evaluate the left operand, then the right one,
    /// then apply the operator. The first error aborts the whole evaluation.
    /// Nothing is cached: every call walks the full tree again.
    ///
    /// # Example
    /// ```
    /// use pebble::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let expr = Expr::binary(Expr::literal(7), BinaryOperator::Div, Expr::literal(2));
    /// assert_eq!(expr.eval().unwrap(), Value::Integer(3));
    /// ```
    pub fn eval(&self) -> EvalResult<Value> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Variable(inner) => inner.eval(),
            Self::BinaryOp { left, op, right } => {
                let left = left.eval()?;
                let right = right.eval()?;
                left.apply(*op, &right)
            },
        }
    }

    /// Applies `op` with this expression as the left operand and an already
    /// evaluated right operand.
    ///
    /// The expression is evaluated first; the operator then dispatches on the
    /// resulting value. This is how a variable delegates operators to the
    /// node it wraps.
    pub fn apply(&self, op: BinaryOperator, right: &Value) -> EvalResult<Value> {
        self.eval()?.apply(op, right)
    }

    /// Evaluates the expression and renders the result as text.
    pub fn render(&self) -> EvalResult<String> {
        Ok(self.eval()?.to_string())
    }
}
