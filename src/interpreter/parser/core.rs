use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    config::Config,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_additive,
            utils::{Nesting, Parsed, peek_token},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a syntax tree.
///
/// Parses one expression and then requires the end-of-input token; anything
/// else left over is reported as a missing operator.
///
/// # Errors
/// The first syntax error encountered, located at the offending token.
///
/// # Example
/// ```
/// use linecalc::{
///     config::Config,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("1 + 2 * 3", "stdin").unwrap();
/// let expr = parse(&tokens, &Config::default()).unwrap();
/// assert_eq!(expr.to_string(), "(INT: 1, ADD, (INT: 2, MUL, INT: 3))");
///
/// let tokens = tokenize("1 2", "stdin").unwrap();
/// let err = parse(&tokens, &Config::default()).unwrap_err();
/// assert_eq!(err.to_string(), "expected operator at line 0, col 2 in file stdin");
/// ```
pub fn parse(tokens: &[Token], config: &Config) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let mut nesting = Nesting::new(config.max_depth);

    let Parsed { expr, height } = parse_expression(&mut iter, &mut nesting)?;

    let next = peek_token(&mut iter)?;
    if next.kind != TokenKind::EndOfInput {
        return Err(ParseError::ExpectedOperator { position: next.position.clone() });
    }

    debug!(target: "linecalc::parser", height, "parsed");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point of the recursive descent and the target of
/// parenthesised groups.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                                      nesting: &mut Nesting)
                                      -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, nesting)
}
