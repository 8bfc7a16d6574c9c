/// Core evaluation logic and context.
///
/// Contains the tree walk, literal evaluation, the depth guard and the
/// public `evaluate` entry point.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements negation and the absolute value applied by unary plus.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles integer/float promotion and the checked arithmetic tables for
/// `+`, `-`, `*` and `/`.
pub mod binary;
