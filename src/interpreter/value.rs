use std::fmt;

use crate::util::num::fixed_notation;

/// The result of evaluating an expression.
///
/// Integers stay integers until they meet a floating-point operand; the
/// float view is computed only at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 32-bit signed integer.
    Integer(i32),
    /// A double precision floating-point number.
    Floating(f64),
}

impl Value {
    /// Converts the value to an `f64`. Every `i32` converts exactly.
    ///
    /// ## Example
    /// ```
    /// use linecalc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_real(), 3.0);
    /// assert_eq!(Value::Floating(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub fn as_real(&self) -> f64 {
        match self {
            Self::Integer(i) => f64::from(*i),
            Self::Floating(r) => *r,
        }
    }
}

/// Writes the bare number: base-10 for integers, fixed notation for floats.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Floating(r) => f.write_str(&fixed_notation(*r)),
        }
    }
}
