use std::fmt;

use crate::interpreter::{
    lexer::{Token, TokenKind},
    position::Position,
};

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children exclusively. Nodes keep the token they were
/// built from so evaluation errors can point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal; the token is an integer or float token.
    Literal {
        /// The literal token.
        token: Token,
    },
    /// A prefix operation; the token is `+` or `-`.
    UnaryOp {
        /// The operator token.
        op:   Token,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// An infix operation; the token is one of `+ - * /`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator token.
        op:    Token,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(token: Token) -> Self {
        Self::Literal { token }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: Token, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, op: Token, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Gets the position of the node's own token.
    /// ## Example
    /// ```
    /// use linecalc::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         lexer::{Token, TokenKind},
    ///         position::Position,
    ///     },
    /// };
    ///
    /// let token = Token::new(TokenKind::Integer(5), Position::new("f", "5"));
    /// let expr = Expr::literal(token);
    ///
    /// assert_eq!(expr.position().column, 0);
    /// ```
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::Literal { token } | Self::UnaryOp { op: token, .. } | Self::BinaryOp { op: token, .. } => {
                &token.position
            },
        }
    }
}

/// Renders the tree as nested tuples, e.g. `(INT: 1, ADD, (SUB, INT: 2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { token } => write!(f, "{token}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}, {expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left}, {op}, {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
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
    /// Maps an operator token to the operation it denotes.
    #[must_use]
    pub const fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Subtract => Some(Self::Sub),
            TokenKind::Multiply => Some(Self::Mul),
            TokenKind::Divide => Some(Self::Div),
            _ => None,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Unary plus, which takes the absolute value (`+x`).
    Absolute,
}

impl UnaryOperator {
    /// Maps a prefix operator token to the operation it denotes.
    #[must_use]
    pub const fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Subtract => Some(Self::Negate),
            TokenKind::Add => Some(Self::Absolute),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
