use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{Nesting, Parsed, peek_token},
        },
    },
};

/// Parses a factor.
///
/// Prefix `+` and `-` are right-associative, so `+-x` is parsed as
/// `+( -x )`. Without a prefix operator the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `nesting`: Depth bookkeeping shared by the whole parse.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 nesting: &mut Nesting)
                                 -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let token = peek_token(tokens)?;
    if !matches!(token.kind, TokenKind::Add | TokenKind::Subtract) {
        return parse_primary(tokens, nesting);
    }

    tokens.next();
    nesting.enter(&token.position)?;
    let operand = parse_unary(tokens, nesting)?;
    nesting.leave();

    let height = operand.height + 1;
    nesting.check_height(height, &token.position)?;
    Ok(Parsed { expr: Expr::unary(token.clone(), operand.expr),
                height })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INT | FLOAT
///              | "(" expression ")"
/// ```
/// # Errors
/// `ExpectedFactor` at the current token when it starts neither form.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let token = peek_token(tokens)?;

    match token.kind {
        TokenKind::Integer(_) | TokenKind::Float(_) => {
            tokens.next();
            Ok(Parsed::leaf(Expr::literal(token.clone())))
        },
        TokenKind::LeftParen => parse_grouping(tokens, nesting),
        _ => Err(ParseError::ExpectedFactor { position: token.position.clone() }),
    }
}

/// Parses a parenthesised expression.
///
/// The group itself adds no node to the tree; it only counts toward the
/// recursion depth.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let open = peek_token(tokens)?;
    tokens.next();
    nesting.enter(&open.position)?;
    let inner = parse_expression(tokens, nesting)?;
    nesting.leave();

    let close = peek_token(tokens)?;
    if close.kind != TokenKind::RightParen {
        return Err(ParseError::ExpectedClosingParen { position: close.position.clone() });
    }
    tokens.next();

    Ok(inner)
}
