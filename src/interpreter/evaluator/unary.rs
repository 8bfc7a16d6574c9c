use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        position::Position,
        value::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers and floats.
    /// - `Absolute`: unary plus. It is not the identity; it returns the
    ///   absolute value, so `+(-5)` is `5`.
    ///
    /// Negating or taking the absolute value of `i32::MIN` overflows and is
    /// reported as an error.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, position::Position, value::Value},
    /// };
    ///
    /// let pos = Position::new("stdin", "");
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Value::Integer(5), &pos).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Absolute, Value::Floating(-2.5), &pos).unwrap();
    /// assert_eq!(v, Value::Floating(2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: &Position) -> EvalResult<Value> {
        let overflow = || RuntimeError::Overflow { position: position.clone() };

        match (op, value) {
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg().map(Value::Integer).ok_or_else(overflow)
            },
            (UnaryOperator::Negate, Value::Floating(r)) => Ok(Value::Floating(-r)),
            (UnaryOperator::Absolute, Value::Integer(n)) => {
                n.checked_abs().map(Value::Integer).ok_or_else(overflow)
            },
            (UnaryOperator::Absolute, Value::Floating(r)) => Ok(Value::Floating(r.abs())),
        }
    }
}
