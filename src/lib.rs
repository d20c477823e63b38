//! # exprsolve
//!
//! exprsolve reduces arithmetic expressions over non-negative integers to a
//! single numeral. Expressions use the binary operators `+ - * x / %` and
//! parentheses; there is no operator precedence, so every operation past the
//! first bare one must be grouped explicitly.
//!
//! ```
//! use exprsolve::{error::EvalError, evaluate};
//!
//! assert_eq!(evaluate("(4+5) * (3*(3+2))").unwrap(), "135");
//! assert_eq!(evaluate("(2+3"), Err(EvalError::Unbalanced));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalResult, interpreter::reducer::Reducer};

/// Provides the error type shared by every stage of evaluation.
///
/// # Responsibilities
/// - Defines the three terminal failures: unbalanced parentheses, an invalid
///   operator, and an invalid residue.
/// - Renders each failure as its fixed message.
pub mod error;
/// Lexes, reduces and resolves expressions.
///
/// This module ties together the lexer, the operator resolver and the
/// reducer that applies it step by step.
pub mod interpreter;
/// Helpers for converting between values and numerals.
pub mod util;

pub use interpreter::operator::resolve;

/// Evaluates an expression and returns its numeric result.
///
/// Whitespace is ignored. Each parenthesized pair is reduced innermost and
/// leftmost first, then at most one bare pair is reduced, and the residue
/// must be made only of digits.
///
/// # Errors
/// - [`EvalError::Unbalanced`](error::EvalError::Unbalanced) if `(` and `)`
///   counts differ.
/// - [`EvalError::Invalid`](error::EvalError::Invalid) if the expression does
///   not reduce to a numeral, including results that are negative,
///   fractional or not finite.
///
/// # Examples
/// ```
/// use exprsolve::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("2 + 3").unwrap(), "5");
/// assert_eq!(evaluate("((2+3)*(4-1))").unwrap(), "15");
/// assert_eq!(evaluate("(2+3) +"), Err(EvalError::Invalid));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<String> {
    Reducer::new().reduce(expression)
}

/// Evaluates an expression and renders the outcome as text.
///
/// Success and failure share one string: either the numeral or the error's
/// message. Prefer [`evaluate`] when the caller needs to tell them apart.
///
/// # Examples
/// ```
/// use exprsolve::evaluate_to_string;
///
/// assert_eq!(evaluate_to_string("(2+3)+(4*1)"), "9");
/// assert_eq!(evaluate_to_string("(2+3))"), "unbalanced expression");
/// assert_eq!(evaluate_to_string("(2 a 5)"), "invalid expression");
/// ```
#[must_use]
pub fn evaluate_to_string(expression: &str) -> String {
    evaluate(expression).unwrap_or_else(|e| e.to_string())
}
