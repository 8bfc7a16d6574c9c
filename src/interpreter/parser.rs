/// Core parsing entry points.
///
/// Holds the top-level `parse` function, the end-of-input check and the
/// result type shared by the other parsing modules.
pub mod core;

/// Prefix and atomic expressions.
///
/// Parses factors: unary `+`/`-`, parenthesised expressions and numeric
/// literals.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels.
pub mod binary;

/// Parsing utilities.
///
/// Lookahead helpers and the nesting bookkeeping used by all levels.
pub mod utils;
