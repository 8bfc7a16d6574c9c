use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult, position::Position},
};

/// A parsed subtree together with its height.
///
/// The height counts operator nodes on the longest path from the subtree's
/// root to a literal, which is also how deep evaluation will recurse.
pub(crate) struct Parsed {
    pub(crate) expr:   Expr,
    pub(crate) height: usize,
}

impl Parsed {
    pub(crate) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 0 }
    }
}

/// Tracks how deep the parser has recursed and how tall subtrees may grow.
pub(crate) struct Nesting {
    depth:     usize,
    max_depth: usize,
}

impl Nesting {
    pub(crate) const fn new(max_depth: usize) -> Self {
        Self { depth: 0, max_depth }
    }

    /// Enters one level of recursion at `position`.
    pub(crate) fn enter(&mut self, position: &Position) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(self.too_deep(position));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of recursion.
    pub(crate) const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks that a new operator node of `height` stays within the limit.
    pub(crate) fn check_height(&self, height: usize, position: &Position) -> ParseResult<()> {
        if height > self.max_depth {
            return Err(self.too_deep(position));
        }
        Ok(())
    }

    fn too_deep(&self, position: &Position) -> ParseError {
        ParseError::NestingTooDeep { max_depth: self.max_depth,
                                     position:  position.clone(), }
    }
}

/// Returns the current token without consuming it.
///
/// Every well-formed token sequence ends in an end-of-input token, which the
/// parser never consumes, so running out of tokens means the sequence was
/// built without one.
pub(crate) fn peek_token<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().ok_or(ParseError::MissingEndOfInput)
}
