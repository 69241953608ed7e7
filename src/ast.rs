use std::fmt;

use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The set of variants is closed: a number, a unary operation or a binary
/// operation. There is no way to represent a name, a call, a string or any
/// other construct, so a successfully parsed tree can only ever describe
/// arithmetic. Each node records the byte offset of its literal or operator
/// for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value; `Float` iff it was written with `.` or an
        /// exponent.
        value:    Value,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// One of the four arithmetic operations.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl Expr {
    /// Returns the byte offset recorded on this node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Negation (`-x`).
    Minus,
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// True division (`/`), always producing a float.
    Div,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Expr {
    /// Writes the expression fully parenthesized, e.g. `(2 + (3 * 4))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
