/// Parsing errors.
///
/// Defines every failure that can occur while turning source text into an
/// [`Expression`](crate::expression::Expression): unrecognized tokens found by
/// the lexer and grammar violations found by the validator.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// sequence to a number, such as stack underflow, unbound variables or
/// arguments outside a function's domain.
pub mod evaluation_error;

pub use evaluation_error::{EvalResult, EvaluationError};
pub use parse_error::{ParseError, ParseResult};
