use crate::interpreter::position::Position;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// No literal, unary operator or parenthesised expression where one was
    /// required.
    #[error("expected factor at {position}")]
    ExpectedFactor {
        /// The position of the offending token.
        position: Position,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("expected ')' at {position}")]
    ExpectedClosingParen {
        /// The position of the offending token.
        position: Position,
    },
    /// A complete expression was followed by something other than an operator
    /// or the end of input.
    #[error("expected operator at {position}")]
    ExpectedOperator {
        /// The position of the trailing token.
        position: Position,
    },
    /// The expression nests deeper than the configured limit.
    #[error("expression nested deeper than {max_depth} levels at {position}")]
    NestingTooDeep {
        /// The configured limit.
        max_depth: usize,
        /// The position of the token that crossed the limit.
        position:  Position,
    },
    /// The token sequence ended without an end-of-input token.
    #[error("token sequence is not terminated by end of input")]
    MissingEndOfInput,
}

impl ParseError {
    /// The position carried by this error, if any.
    #[must_use]
    pub const fn position(&self) -> Option<&Position> {
        match self {
            Self::ExpectedFactor { position }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedOperator { position }
            | Self::NestingTooDeep { position, .. } => Some(position),
            Self::MissingEndOfInput => None,
        }
    }
}
