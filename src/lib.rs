//! # calculator
//!
//! calculator provides variadic arithmetic primitives, a checked square root,
//! and an evaluator for two-operand infix expressions such as `10 / 2`.
//!
//! Expressions contain exactly one operator from `+ - * /`. There is no
//! operator precedence, no parentheses and no unary minus.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Stateless arithmetic over slices of `f64`.
///
/// Every primitive folds its operands left to right. Division and square
/// root are the only ones that can fail.
pub mod arithmetic;
/// Defines the parsed form of an expression.
///
/// Declares the closed `Operator` set, the `Side` an operand sits on, and the
/// `Expression` the parser produces and the evaluator consumes.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - One enum per failure phase: syntax, operand parsing, arithmetic.
/// - An umbrella `EvalError` that `?` converts into.
/// - Human readable `Display` messages for the command line.
pub mod error;
/// Turns expression strings into results.
///
/// Ties together the lexer, parser and evaluator.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

pub use arithmetic::{add, divide, multiply, sqrt, subtract};
pub use error::{EvalError, LineError};

use crate::interpreter::{evaluator::eval_expression, parser::parse_expression};

/// Evaluates a single two-operand expression.
///
/// # Errors
/// Returns an error if the text has no operator, is not split into exactly
/// two operands, has an operand that is not a number, or divides by zero.
///
/// # Examples
/// ```
/// use calculator::{EvalError, error::RuntimeError, evaluate};
///
/// assert_eq!(evaluate("1 + 1").unwrap(), 2.0);
/// assert_eq!(evaluate("10/2").unwrap(), 5.0);
///
/// let err = evaluate("10 / 0").unwrap_err();
/// assert_eq!(err, EvalError::Runtime(RuntimeError::DivisionByZero { index: 1 }));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let parsed = parse_expression(expression)?;
    Ok(eval_expression(&parsed)?)
}

/// Evaluates every expression line in `source`.
///
/// Blank lines and lines starting with `#` are skipped. Evaluation stops at
/// the first failing line.
///
/// # Errors
/// Returns a `LineError` carrying the 1-based line number of the first
/// expression that fails to evaluate.
///
/// # Examples
/// ```
/// use calculator::evaluate_lines;
///
/// let source = "# totals\n1 + 2\n\n10 / 4\n";
/// assert_eq!(evaluate_lines(source).unwrap(), vec![3.0, 2.5]);
///
/// let err = evaluate_lines("1 + 1\n2 plus 2").unwrap_err();
/// assert_eq!(err.line, 2);
/// ```
pub fn evaluate_lines(source: &str) -> Result<Vec<f64>, LineError> {
    source.lines()
          .enumerate()
          .filter(|(_, text)| {
              let trimmed = text.trim_start();
              !trimmed.is_empty() && !trimmed.starts_with('#')
          })
          .map(|(i, text)| {
              evaluate(text).map_err(|error| LineError { line: i + 1,
                                                         error })
          })
          .collect()
}
