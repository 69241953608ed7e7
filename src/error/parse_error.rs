use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the 0-based byte offset in the source text where the
/// problem was detected. Anything that is not part of the arithmetic grammar
/// ends up here; nothing outside the grammar ever reaches the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no tokens at all.
    #[error("Empty expression.")]
    EmptyExpression,
    /// A character sequence that is not a number, operator or parenthesis.
    #[error("Invalid token '{token}' at position {position}.")]
    InvalidToken {
        /// The offending source text.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A numeric literal that cannot be represented.
    #[error("Literal '{literal}' at position {position} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// Found a token where a number or `(` was expected.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input where an operand was expected.
    #[error("Unexpected end of input at position {position}.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A `(` was never closed.
    #[error("Expected closing parenthesis ')' for '(' at position {position}.")]
    ExpectedClosingParen {
        /// Byte offset of the unclosed `(`.
        position: usize,
    },
    /// A `)` appeared without a matching `(`.
    #[error("Unmatched closing parenthesis at position {position}.")]
    UnmatchedClosingParen {
        /// Byte offset of the stray `)`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra tokens after expression, starting with '{token}' at position {position}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the first extra token.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Expression nesting exceeds the limit of {limit} at position {position}.")]
    NestingTooDeep {
        /// The depth limit that was exceeded.
        limit:    usize,
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Returns the source position of the error, if it has one.
    ///
    /// Only [`ParseError::EmptyExpression`] has no position.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression => None,
            Self::InvalidToken { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnmatchedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(*position),
        }
    }
}
