use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// A successfully parsed tree only contains numbers and the four arithmetic
/// operators, so the only way evaluation can fail is arithmetic itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero at position {position}.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the source position of the failing operation.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } => *position,
        }
    }
}
