use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::{Nesting, Parsed, peek_token},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an expression.
/// - `nesting`: Depth bookkeeping shared by the whole parse.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub(crate) fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                                    nesting: &mut Nesting)
                                    -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    parse_chain(tokens,
                nesting,
                |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub(crate) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                          nesting: &mut Nesting)
                                          -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    parse_chain(tokens,
                nesting,
                |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning tree.
///
/// Only operators accepted by `accepts` continue the chain; any other token
/// ends it and is left for the caller.
fn parse_chain<'a, I>(tokens: &mut Peekable<I>,
                      nesting: &mut Nesting,
                      accepts: fn(BinaryOperator) -> bool,
                      operand: fn(&mut Peekable<I>, &mut Nesting) -> ParseResult<Parsed>)
                      -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens, nesting)?;
    loop {
        let token = peek_token(tokens)?;
        if let Some(op) = BinaryOperator::from_token(&token.kind)
           && accepts(op)
        {
            tokens.next();
            let right = operand(tokens, nesting)?;
            let height = left.height.max(right.height) + 1;
            nesting.check_height(height, &token.position)?;

            trace!(target: "linecalc::parser", %op, height, "fold");
            left = Parsed { expr: Expr::binary(left.expr, token.clone(), right.expr),
                            height };
            continue;
        }
        break;
    }
    Ok(left)
}
