use tracing::trace;

use crate::{
    ast::BinaryOperator,
    config::FloatDivision,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        position::Position,
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// If either operand is a float both are promoted and float arithmetic is
    /// used; otherwise checked `i32` arithmetic applies, with division
    /// truncating toward zero.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, position::Position, value::Value},
    /// };
    ///
    /// let context = Context::default();
    /// let pos = Position::new("stdin", "");
    ///
    /// let result = context.eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(-2), &pos);
    /// assert_eq!(result.unwrap(), Value::Integer(-3));
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, Value::Integer(1), Value::Floating(0.5), &pos);
    /// assert_eq!(result.unwrap(), Value::Floating(1.5));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: &Position)
                       -> EvalResult<Value> {
        let result = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_op(op, a, b, position)?,
            _ => self.eval_real_op(op, left.as_real(), right.as_real(), position)?,
        };
        trace!(target: "linecalc::evaluator", %left, %op, %right, %result, "binary");
        Ok(result)
    }

    /// Evaluates an integer operation, failing instead of wrapping.
    fn eval_integer_op(op: BinaryOperator, a: i32, b: i32, position: &Position) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op == Div && b == 0 {
            return Err(RuntimeError::DivisionByZero { position: position.clone() });
        }

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => a.checked_div(b),
        };

        result.map(Value::Integer)
              .ok_or_else(|| RuntimeError::Overflow { position: position.clone() })
    }

    /// Evaluates a float operation after promotion.
    fn eval_real_op(&self, op: BinaryOperator, a: f64, b: f64, position: &Position) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(Value::Floating(match op {
                               Add => a + b,
                               Sub => a - b,
                               Mul => a * b,
                               Div => {
                                   if b == 0.0 && self.float_division == FloatDivision::Error {
                                       return Err(RuntimeError::DivisionByZero { position: position.clone() });
                                   }
                                   a / b
                               },
                           }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> Position {
        Position::new("test", "")
    }

    fn ieee() -> Context {
        Context { float_division: FloatDivision::Ieee,
                  ..Context::default() }
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        let context = Context::default();
        assert_eq!(context.eval_binary(BinaryOperator::Div, Value::Integer(3), Value::Integer(2), &pos()),
                   Ok(Value::Integer(1)));
        assert_eq!(context.eval_binary(BinaryOperator::Div, Value::Integer(-7), Value::Integer(2), &pos()),
                   Ok(Value::Integer(-3)));
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        let context = Context::default();
        assert_eq!(context.eval_binary(BinaryOperator::Div, Value::Floating(3.0), Value::Integer(2), &pos()),
                   Ok(Value::Floating(1.5)));
        assert_eq!(context.eval_binary(BinaryOperator::Mul, Value::Integer(2), Value::Floating(0.25), &pos()),
                   Ok(Value::Floating(0.5)));
    }

    #[test]
    fn integer_division_by_zero_is_an_error_under_every_policy() {
        for context in [Context::default(), ieee()] {
            assert!(matches!(context.eval_binary(BinaryOperator::Div, Value::Integer(1), Value::Integer(0), &pos()),
                             Err(RuntimeError::DivisionByZero { .. })));
        }
    }

    #[test]
    fn float_division_by_zero_follows_the_policy() {
        let strict = Context::default();
        assert!(matches!(strict.eval_binary(BinaryOperator::Div, Value::Floating(1.0), Value::Integer(0), &pos()),
                         Err(RuntimeError::DivisionByZero { .. })));

        let lenient = ieee();
        assert_eq!(lenient.eval_binary(BinaryOperator::Div, Value::Integer(-1), Value::Floating(0.0), &pos()),
                   Ok(Value::Floating(f64::NEG_INFINITY)));
        match lenient.eval_binary(BinaryOperator::Div, Value::Floating(0.0), Value::Floating(0.0), &pos()) {
            Ok(Value::Floating(r)) => assert!(r.is_nan()),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn integer_overflow_is_an_error() {
        let context = Context::default();
        for (op, a, b) in [(BinaryOperator::Add, i32::MAX, 1),
                           (BinaryOperator::Sub, i32::MIN, 1),
                           (BinaryOperator::Mul, 65_536, 65_536),
                           (BinaryOperator::Div, i32::MIN, -1)]
        {
            assert!(matches!(context.eval_binary(op, Value::Integer(a), Value::Integer(b), &pos()),
                             Err(RuntimeError::Overflow { .. })));
        }
    }

    #[test]
    fn float_arithmetic_does_not_overflow_into_errors() {
        let context = Context::default();
        assert_eq!(context.eval_binary(BinaryOperator::Add, Value::Integer(i32::MAX), Value::Floating(1.0), &pos()),
                   Ok(Value::Floating(2_147_483_648.0)));
    }
}
