use thiserror::Error;

/// Result type used by the evaluator and the function table.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Represents all errors that can occur while evaluating a postfix sequence.
///
/// Callers only need to know that evaluation failed; the variants keep the
/// cause for logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// An operator or function needed a value but the stack was empty.
    #[error("Evaluation error: value stack underflow.")]
    StackUnderflow,
    /// More than one value was left on the stack after the last item.
    #[error("Evaluation error: {count} values left on the stack, expected exactly one.")]
    LeftoverValues {
        /// Number of values remaining.
        count: usize,
    },
    /// A variable index had no corresponding entry in the supplied values.
    #[error("Evaluation error: variable X{index} is unbound, only {supplied} value(s) supplied.")]
    UnboundVariable {
        /// The referenced variable index.
        index:    usize,
        /// Number of values supplied by the caller.
        supplied: usize,
    },
    /// A function received a different number of arguments than its arity.
    #[error("Evaluation error: {function} takes {expected} argument(s) but received {found}.")]
    ArgumentCountMismatch {
        /// Display name of the function.
        function: &'static str,
        /// The function's fixed arity.
        expected: usize,
        /// Number of arguments actually supplied.
        found:    usize,
    },
    /// An argument lies outside the function's domain.
    #[error("Evaluation error: invalid argument to {function}: {details}.")]
    InvalidArgument {
        /// Display name of the function.
        function: &'static str,
        /// Why the argument was rejected.
        details:  String,
    },
    /// A structural item (parenthesis, comma, skip marker) reached the
    /// evaluator.
    #[error("Evaluation error: unexpected item '{item}' in postfix sequence.")]
    UnexpectedItem {
        /// Canonical form of the item.
        item: String,
    },
}
