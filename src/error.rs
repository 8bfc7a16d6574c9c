use crate::interpreter::position::Position;

/// Lexing errors.
///
/// Raised while turning source text into tokens: characters outside the
/// language and numeric literals that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token sequence, such as a missing factor, an unclosed parenthesis or
/// trailing tokens after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// division by zero, integer overflow and malformed tree shapes.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running one line of input.
///
/// Exactly one of the three pipeline stages failed; the message of the inner
/// error is forwarded unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token sequence.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of the syntax tree failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the source position the error refers to, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<&Position> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => Some(e.position()),
        }
    }

    /// A short name for the failing stage.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(_) => "LexError",
            Self::Parse(_) => "SyntaxError",
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => "DivisionByZero",
            Self::Runtime(_) => "EvalError",
        }
    }
}
