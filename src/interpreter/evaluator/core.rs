use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    config::{Config, FloatDivision},
    error::RuntimeError,
    interpreter::{
        lexer::{Token, TokenKind},
        position::Position,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation settings.
///
/// A `Context` holds no state between calls; it only carries the limits and
/// policies taken from a [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Deepest chain of operator nodes that will be evaluated.
    pub max_depth:      usize,
    /// Policy for floating-point division by zero.
    pub float_division: FloatDivision,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Context {
    /// Creates a context from a configuration.
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self { max_depth:      config.max_depth,
               float_division: config.float_division, }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Children are evaluated before their parent, left before right.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     config::Config,
    ///     interpreter::{
    ///         evaluator::core::Context, lexer::tokenize, parser::core::parse, value::Value,
    ///     },
    /// };
    ///
    /// let tokens = tokenize("3.0 / 2", "stdin").unwrap();
    /// let expr = parse(&tokens, &Config::default()).unwrap();
    /// assert_eq!(Context::default().eval(&expr).unwrap(), Value::Floating(1.5));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        self.eval_at(expr, 0)
    }

    fn eval_at(&self, expr: &Expr, depth: usize) -> EvalResult<Value> {
        match expr {
            Expr::Literal { token } => Self::eval_literal(token),
            Expr::UnaryOp { op, expr } => {
                let depth = self.descend(depth, &op.position)?;
                let value = self.eval_at(expr, depth)?;
                let operator = UnaryOperator::from_token(&op.kind).ok_or_else(|| invalid(op))?;
                Self::eval_unary(operator, value, &op.position)
            },
            Expr::BinaryOp { left, op, right } => {
                let depth = self.descend(depth, &op.position)?;
                let left = self.eval_at(left, depth)?;
                let right = self.eval_at(right, depth)?;
                let operator = BinaryOperator::from_token(&op.kind).ok_or_else(|| invalid(op))?;
                self.eval_binary(operator, left, right, &op.position)
            },
        }
    }

    /// Evaluates a literal token.
    fn eval_literal(token: &Token) -> EvalResult<Value> {
        match token.kind {
            TokenKind::Integer(i) => Ok(Value::Integer(i)),
            TokenKind::Float(r) => Ok(Value::Floating(r)),
            _ => Err(invalid(token)),
        }
    }

    fn descend(&self, depth: usize, position: &Position) -> EvalResult<usize> {
        if depth >= self.max_depth {
            return Err(RuntimeError::NestingTooDeep { max_depth: self.max_depth,
                                                      position:  position.clone(), });
        }
        Ok(depth + 1)
    }
}

fn invalid(token: &Token) -> RuntimeError {
    RuntimeError::InvalidNode { position: token.position.clone() }
}

/// Evaluates a syntax tree with the given configuration.
///
/// # Errors
/// Division by zero, integer overflow, trees deeper than
/// `config.max_depth` and nodes carrying the wrong kind of token.
pub fn evaluate(expr: &Expr, config: &Config) -> EvalResult<Value> {
    let value = Context::new(config).eval(expr)?;
    debug!(target: "linecalc::evaluator", %value, "evaluated");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::core::parse};

    fn token(kind: TokenKind, column: usize) -> Token {
        let mut position = Position::new("test", "");
        position.column = column;
        Token::new(kind, position)
    }

    fn eval_str(source: &str) -> EvalResult<Value> {
        let tokens = tokenize(source, "test").unwrap();
        let expr = parse(&tokens, &Config::default()).unwrap();
        evaluate(&expr, &Config::default())
    }

    #[test]
    fn literal_with_operator_token_is_invalid() {
        let expr = Expr::literal(token(TokenKind::Add, 3));
        let err = Context::default().eval(&expr).unwrap_err();
        assert_eq!(err.to_string(), "evaluation error at line 0, col 3 in file test");
    }

    #[test]
    fn unary_with_non_sign_operator_is_invalid() {
        let expr = Expr::unary(token(TokenKind::Multiply, 1), Expr::literal(token(TokenKind::Integer(2), 2)));
        assert!(matches!(Context::default().eval(&expr),
                         Err(RuntimeError::InvalidNode { position }) if position.column == 1));
    }

    #[test]
    fn binary_with_paren_operator_is_invalid() {
        let expr = Expr::binary(Expr::literal(token(TokenKind::Integer(1), 0)),
                                token(TokenKind::LeftParen, 2),
                                Expr::literal(token(TokenKind::Integer(2), 4)));
        assert!(matches!(Context::default().eval(&expr), Err(RuntimeError::InvalidNode { .. })));
    }

    #[test]
    fn invalid_child_fails_before_parent_operator_is_checked() {
        let expr = Expr::unary(token(TokenKind::RightParen, 0), Expr::literal(token(TokenKind::EndOfInput, 7)));
        match Context::default().eval(&expr) {
            Err(RuntimeError::InvalidNode { position }) => assert_eq!(position.column, 7),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn hand_built_trees_respect_the_depth_limit() {
        let mut expr = Expr::literal(token(TokenKind::Integer(1), 0));
        for _ in 0..10 {
            expr = Expr::unary(token(TokenKind::Subtract, 0), expr);
        }
        let shallow = Context { max_depth: 9, ..Context::default() };
        assert!(matches!(shallow.eval(&expr), Err(RuntimeError::NestingTooDeep { max_depth: 9, .. })));
        let enough = Context { max_depth: 10, ..Context::default() };
        assert_eq!(enough.eval(&expr).unwrap(), Value::Integer(1));
    }

    /// Builds expressions exercising every production, alone and combined.
    fn productions() -> Vec<String> {
        let operands = ["7", "2.5", "(3 - 1)", "-4", "+-6.0", "(+(2))"];
        let unary = ["", "-", "+", "--", "+-"];
        let binary = ["+", "-", "*", "/"];

        let mut sources = Vec::new();
        for a in operands {
            for u in unary {
                sources.push(format!("{u}{a}"));
                for op in binary {
                    for b in operands {
                        sources.push(format!("{u}{a} {op} {b}"));
                        sources.push(format!("{a} {op} {u}({b} {op} {a})"));
                    }
                }
            }
        }
        sources
    }

    #[test]
    fn parsed_trees_never_hit_the_invalid_node_branch() {
        let sources = productions();
        assert!(sources.len() > 1000);
        for source in sources {
            match eval_str(&source) {
                Ok(_) | Err(RuntimeError::DivisionByZero { .. } | RuntimeError::Overflow { .. }) => {},
                Err(e) => panic!("{source} failed with {e}"),
            }
        }
    }
}
