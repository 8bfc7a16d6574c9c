/// Default nesting limit for parsing and evaluation.
///
/// Every parenthesis costs several parser frames, so the limit keeps a full
/// parse within a 2 MiB thread stack in unoptimised builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What dividing a floating-point value by zero produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatDivision {
    /// Fail with `RuntimeError::DivisionByZero`, like integer division.
    #[default]
    Error,
    /// Follow IEEE 754 and produce an infinity or NaN.
    Ieee,
}

/// Limits and policies shared by the parser and the evaluator.
///
/// ## Example
/// ```
/// use linecalc::config::{Config, FloatDivision};
///
/// let config = Config::default().with_max_depth(16)
///                               .with_float_division(FloatDivision::Ieee);
/// assert_eq!(config.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest nesting of unary operators, parentheses and binary folds
    /// accepted before input is rejected.
    pub max_depth:      usize,
    /// Policy for floating-point division by zero.
    pub float_division: FloatDivision,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth:      DEFAULT_MAX_DEPTH,
               float_division: FloatDivision::default(), }
    }
}

impl Config {
    /// Returns a copy with a different nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a copy with a different float division policy.
    #[must_use]
    pub const fn with_float_division(mut self, float_division: FloatDivision) -> Self {
        self.float_division = float_division;
        self
    }
}
