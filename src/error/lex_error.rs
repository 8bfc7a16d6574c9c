use crate::interpreter::position::Position;

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    /// A character that does not start any token.
    ///
    /// The position is the one *after* the offending character.
    #[error("illegal character '{character}' at {position}")]
    IllegalCharacter {
        /// The rejected character.
        character: char,
        /// The position just past the character.
        position:  Position,
    },
    /// An integer literal outside the 32-bit signed range.
    #[error("integer literal {literal} is too large at {position}")]
    IntegerTooLarge {
        /// The literal as written.
        literal:  String,
        /// The position of the literal's first digit.
        position: Position,
    },
}

impl LexError {
    /// The position carried by this error.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::IllegalCharacter { position, .. }
            | Self::IntegerTooLarge { position, .. } => position,
        }
    }
}
