//! # linecalc
//!
//! linecalc is a single-line arithmetic calculator written in Rust.
//! It tokenizes, parses and evaluates expressions over 32-bit integers and
//! double precision floats with `+ - * /`, unary signs and parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    config::Config,
    interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator enums the evaluator
/// dispatches on. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines literal, unary and binary expression nodes.
/// - Keeps the source token on every node for error reporting.
/// - Renders trees in a stable nested-tuple form.
pub mod ast;
/// Limits and policies for a run.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a line of
/// input. Every error carries the source position it refers to and renders it
/// in its message.
///
/// # Responsibilities
/// - Defines error enums for every stage (lexer, parser, evaluator).
/// - Wraps them in a single `Error` for callers of the pipeline.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Tracks source positions across stages.
pub mod interpreter;
/// Formatting of results and errors for the terminal.
pub mod report;
/// General numeric helpers.
pub mod util;

pub use crate::error::Error;

/// Tokenizes and parses one line, returning its syntax tree.
///
/// # Examples
/// ```
/// use linecalc::{config::Config, parse_source};
///
/// let expr = parse_source("-(1 + 2)", "stdin", &Config::default()).unwrap();
/// assert_eq!(expr.to_string(), "(SUB, (INT: 1, ADD, INT: 2))");
/// ```
pub fn parse_source(source: &str, source_name: &str, config: &Config) -> Result<Expr, Error> {
    let tokens = tokenize(source, source_name)?;
    Ok(parse(&tokens, config)?)
}

/// Runs one line through every stage with an explicit configuration.
///
/// The first failing stage stops the run; later stages are never invoked.
///
/// # Examples
/// ```
/// use linecalc::{
///     config::{Config, FloatDivision},
///     interpreter::value::Value,
///     run_with_config,
/// };
///
/// let config = Config::default().with_float_division(FloatDivision::Ieee);
/// let value = run_with_config("1.0 / 0", "stdin", &config).unwrap();
/// assert_eq!(value, Value::Floating(f64::INFINITY));
/// ```
pub fn run_with_config(source: &str, source_name: &str, config: &Config) -> Result<Value, Error> {
    let expr = parse_source(source, source_name, config)?;
    Ok(evaluate(&expr, config)?)
}

/// Runs one line of input with the default configuration.
///
/// `source_name` only appears in error positions.
///
/// # Examples
/// ```
/// use linecalc::{interpreter::value::Value, run};
///
/// assert_eq!(run("10 - 3 - 2", "stdin").unwrap(), Value::Integer(5));
/// assert_eq!(run("3.0 / 2", "stdin").unwrap(), Value::Floating(1.5));
///
/// let err = run("2 + ", "stdin").unwrap_err();
/// assert_eq!(err.to_string(), "expected factor at line 0, col 4 in file stdin");
/// ```
pub fn run(source: &str, source_name: &str) -> Result<Value, Error> {
    run_with_config(source, source_name, &Config::default())
}
