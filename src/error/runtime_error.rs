use crate::interpreter::position::Position;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A node whose token cannot appear in that place of the tree.
    ///
    /// The parser never builds such nodes; only hand-assembled trees do.
    #[error("evaluation error at {position}")]
    InvalidNode {
        /// The position of the node's token.
        position: Position,
    },
    /// Attempted division by zero.
    #[error("division by zero at {position}")]
    DivisionByZero {
        /// The position of the `/` operator.
        position: Position,
    },
    /// Integer arithmetic left the 32-bit signed range.
    #[error("integer overflow at {position}")]
    Overflow {
        /// The position of the operator.
        position: Position,
    },
    /// The tree nests deeper than the configured limit.
    #[error("expression nested deeper than {max_depth} levels at {position}")]
    NestingTooDeep {
        /// The configured limit.
        max_depth: usize,
        /// The position of the node that crossed the limit.
        position:  Position,
    },
}

impl RuntimeError {
    /// The position carried by this error.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::InvalidNode { position }
            | Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::NestingTooDeep { position, .. } => position,
        }
    }
}
