use crate::interpreter::{lexer::TokenKind, value::core::Value};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Trees are built by a parser from the token stream and are strictly owned:
/// every node owns its children, nothing is shared and nothing is mutated
/// while evaluating.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant value (boolean, integer, float or string).
    Literal(Value),
    /// A deferred sub-expression. Evaluating it forces the wrapped node.
    Variable(Box<Self>),
    /// A two-operand operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Wraps `inner` in a variable node.
    #[must_use]
    pub fn variable(inner: Self) -> Self {
        Self::Variable(Box::new(inner))
    }

    /// Builds a binary operation node. Both operands are required.
    ///
    /// # Example
    /// ```
    /// use pebble::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::literal(2), BinaryOperator::Add, Expr::literal(3));
    /// assert_eq!(sum.render().unwrap(), "5");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps an operator token to the binary operator it denotes.
    ///
    /// Returns `None` for tokens that are not binary operators, including the
    /// assignment `=`.
    ///
    /// # Example
    /// ```
    /// use pebble::{ast::BinaryOperator, interpreter::lexer::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::from_token(TokenKind::EqualEqual),
    ///            Some(BinaryOperator::Equal));
    /// assert_eq!(BinaryOperator::from_token(TokenKind::Equal), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::EqualEqual => Some(Self::Equal),
            TokenKind::NotEqual => Some(Self::NotEqual),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
