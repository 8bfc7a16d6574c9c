use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

use crate::{error::LexError, interpreter::position::Position, util::num::fixed_notation};

/// The kind of a token, carrying the value of numeric literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    Integer(i32),
    /// Floating-point literal tokens, such as `3.14` or `2.`.
    Float(f64),
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Closes every token sequence.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "INT: {value}"),
            Self::Float(value) => write!(f, "FLOAT: {}", fixed_notation(*value)),
            Self::Add => write!(f, "ADD"),
            Self::Subtract => write!(f, "SUB"),
            Self::Multiply => write!(f, "MUL"),
            Self::Divide => write!(f, "DIV"),
            Self::LeftParen => write!(f, "LPAREN"),
            Self::RightParen => write!(f, "RPAREN"),
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}

/// A lexical token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was recognised.
    pub kind:     TokenKind,
    /// Where it starts in the source.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// Failures raised from inside the `logos` callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexFault {
    #[default]
    Unrecognized,
    IntegerTooLarge,
}

/// Raw lexemes as matched by `logos`, before positions are attached.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexFault)]
enum Lexeme {
    /// Digits with exactly one decimal point; a second point ends the match.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i32),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Parses a floating-point literal from the current token slice.
///
/// Every slice the regex admits is a valid `f64`, large ones rounding to
/// infinity.
fn parse_float(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Values outside the `i32` range are rejected instead of truncated.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Result<i32, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::IntegerTooLarge)
}

/// Turns one line of source text into tokens.
///
/// The returned sequence always ends with a [`TokenKind::EndOfInput`] token
/// positioned just past the last character.
///
/// # Errors
/// Fails on the first character that does not start a token, reporting the
/// position right after it, and on integer literals that do not fit in an
/// `i32`.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("1 + 2.5", "stdin").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Integer(1), TokenKind::Add, TokenKind::Float(2.5), TokenKind::EndOfInput]);
///
/// let err = tokenize("2 $ 3", "stdin").unwrap_err();
/// assert_eq!(err.to_string(), "illegal character '$' at line 0, col 3 in file stdin");
/// ```
pub fn tokenize(source: &str, filename: &str) -> Result<Vec<Token>, LexError> {
    let mut position = Position::new(filename, source);
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        position.advance_to(span.start);
        let start = position.clone();

        let lexeme = match result {
            Ok(lexeme) => lexeme,
            Err(LexFault::Unrecognized) => {
                let character = source[span.start..].chars().next().unwrap_or('\u{fffd}');
                position.advance(character);
                return Err(LexError::IllegalCharacter { character, position });
            },
            Err(LexFault::IntegerTooLarge) => {
                return Err(LexError::IntegerTooLarge { literal:  lexer.slice().to_string(),
                                                       position: start, });
            },
        };

        let kind = match lexeme {
            Lexeme::Float(value) => TokenKind::Float(value),
            Lexeme::Integer(value) => TokenKind::Integer(value),
            Lexeme::Plus => TokenKind::Add,
            Lexeme::Minus => TokenKind::Subtract,
            Lexeme::Star => TokenKind::Multiply,
            Lexeme::Slash => TokenKind::Divide,
            Lexeme::LParen => TokenKind::LeftParen,
            Lexeme::RParen => TokenKind::RightParen,
            Lexeme::Ignored => continue,
        };

        trace!(target: "linecalc::lexer", %kind, at = %start, "token");
        tokens.push(Token::new(kind, start));
        position.advance_to(span.end);
    }

    position.advance_to(source.len());
    tokens.push(Token::new(TokenKind::EndOfInput, position));
    debug!(target: "linecalc::lexer", count = tokens.len(), filename, "tokenized");

    Ok(tokens)
}
