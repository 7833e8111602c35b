use thiserror::Error;

/// Result type used by the lexer, the validator and expression construction.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents all errors that can occur while building an expression.
///
/// Every variant is a parse error as far as callers are concerned; the
/// variants only exist so the cause can be logged or asserted on in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer met a token that is neither a separator, a keyword, a
    /// variable nor a decimal numeral.
    #[error("Parse error: unrecognized token '{token}' at byte {position}.")]
    UnrecognizedToken {
        /// The offending token, trimmed and lower-cased.
        token:    String,
        /// Byte offset of the token in the source text.
        position: usize,
    },
    /// The input contained no tokens at all.
    #[error("Parse error: empty expression.")]
    Empty,
    /// The token sequence does not match the expression grammar.
    #[error("Parse error: unexpected {found} at item {position}.")]
    Syntax {
        /// Index of the first item the recognizer could not consume.
        position: usize,
        /// Canonical form of that item, or `end of input`.
        found:    String,
    },
    /// A function was called with the wrong number of arguments.
    #[error("Parse error: {function} takes {expected} argument(s) but {found} were supplied.")]
    ArityMismatch {
        /// Display name of the function.
        function: &'static str,
        /// The function's fixed arity.
        expected: usize,
        /// Number of arguments found in the call.
        found:    usize,
    },
}
