use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: disallowed characters, malformed literals, unbalanced
/// parentheses, trailing input and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while evaluating an already
/// validated expression tree. Division by zero is the only one.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Broad classification of an [`EvaluatorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a valid arithmetic expression.
    Syntax,
    /// The input nests deeper than the configured limit.
    NestingTooDeep,
    /// A division had a zero divisor.
    DivisionByZero,
}

/// Any failure surfaced by [`crate::evaluate_expression`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    /// Rejected before evaluation started.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvaluatorError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use sandcalc::{error::ErrorKind, evaluate_expression};
    ///
    /// let err = evaluate_expression("10 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = evaluate_expression("1 + a").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
        }
    }

    /// Returns the approximate byte offset in the source where the error
    /// was detected.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => Some(e.position()),
        }
    }
}
