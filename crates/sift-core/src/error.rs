//! Error types for filter compilation and evaluation.

use thiserror::Error;

/// Errors that can occur while compiling or running a filter, or while
/// reading JSON input at the boundary.
///
/// Every error is fatal to the call that produced it: the first failure
/// aborts compilation/evaluation and surfaces to the caller. The core never
/// logs, retries, or recovers on its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiftError {
    /// The filter text could not be tokenized. `pos` is the character
    /// offset at which the lexer gave up.
    #[error("lex error at offset {pos}: {message}")]
    Lex { pos: usize, message: String },

    /// The token stream did not match the filter grammar. `pos` is the
    /// index of the offending token.
    #[error("parse error at token {pos}: {message}")]
    Parse { pos: usize, message: String },

    /// An operation was applied to a value variant it does not support
    /// (field access on a non-object, indexing a non-array, negating a
    /// non-number).
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Object field access missed.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// A built-in (`length`, `keys`) was applied to a variant it does not
    /// support.
    #[error("{builtin} is not supported for {actual}")]
    UnsupportedType {
        builtin: &'static str,
        actual: &'static str,
    },

    /// Arithmetic between incompatible variants.
    #[error("invalid operands for '{op}': {left} and {right}")]
    InvalidOperand {
        op: char,
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// The input text was not valid JSON (boundary path, not the filter
    /// language itself).
    #[error("JSON parse error: {message}")]
    JsonParse { message: String },
}

// Manual conversion instead of `#[from]` so the enum stays Clone + PartialEq
// and tests can assert exact failures.
impl From<serde_json::Error> for SiftError {
    fn from(err: serde_json::Error) -> Self {
        SiftError::JsonParse {
            message: err.to_string(),
        }
    }
}

/// Convenience alias used throughout sift-core.
pub type Result<T> = std::result::Result<T, SiftError>;
