//! # exprcalc
//!
//! exprcalc parses infix arithmetic expressions and evaluates them against
//! variable bindings. An expression may use the four basic operators,
//! parentheses, unary minus, variables `x0`, `x1`, ..., numerals and a fixed
//! catalog of built-in functions (`pi`, `e`, `ln`, `exp`, `log`, `sqr`,
//! `sqrt`, `abs`, `pow`, `factorial`).
//!
//! Parsing runs a fixed pipeline: tokenize, validate, convert to postfix.
//! The resulting [`Expression`] can then be evaluated any number of times.
//!
//! ```
//! let expr = exprcalc::parse("Exp(Ln(x0 + x1))").unwrap();
//! assert_eq!(expr.variable_count(), 2);
//! assert!((expr.evaluate(&[123.0, 4567.0]).unwrap() - 4690.0).abs() < 1e-9);
//! ```

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for parsing and evaluation.
///
/// Construction of an expression can only fail with a [`ParseError`], and
/// evaluation can only fail with an [`EvaluationError`]. Each type is an enum
/// whose variants keep the underlying cause for logging and tests.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Attaches the offending token, position or function to each error.
/// - Implements `std::error::Error` through `thiserror`.
pub mod error;
/// Defines the expression façade.
///
/// [`Expression`] owns the parsed form of one expression and exposes its
/// canonical text, its variable count and the evaluate entry point.
pub mod expression;
/// Holds the pipeline stages.
///
/// Lexer, validator, postfix converter and evaluator live here, each one
/// consuming only what the previous stage produced.
///
/// # Responsibilities
/// - Converts text into items and checks them against the grammar.
/// - Reorders items into postfix form.
/// - Evaluates postfix sequences over a value stack.
pub mod interpreter;
/// Defines the item type shared by all pipeline stages.
///
/// An [`Item`](item::Item) is a classified token: an operand, an operator, a
/// function or a structural symbol, each with the fixed priority used by the
/// postfix converter.
pub mod item;

pub use error::{EvaluationError, ParseError};
pub use expression::Expression;

/// Parses `text` into an [`Expression`].
///
/// This is the library's construction entry point; it is equivalent to
/// [`Expression::parse`].
///
/// # Errors
/// Returns a [`ParseError`] if the text contains an unrecognized token or is
/// not exactly one well-formed expression.
///
/// # Examples
/// ```
/// use exprcalc::parse;
///
/// assert_eq!(parse("5 - 3 - 1").unwrap().evaluate(&[]).unwrap(), 1.0);
/// assert_eq!(parse("--5").unwrap().evaluate(&[]).unwrap(), 5.0);
///
/// assert!(parse("(1+2").is_err());
/// assert!(parse("abc123").is_err());
/// ```
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    Expression::parse(text)
}
