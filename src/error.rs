//! Error types for parsing, serialization, and coercion.
//!
//! All fallible operations in this crate return [`Result`], whose error
//! type is the single [`Error`] enum. Errors fall into four families:
//!
//! - **Lex errors**: a structurally invalid literal or an illegal character
//!   during tokenization, tagged with line/column position
//! - **Parse errors**: structural violations — a wrong token kind,
//!   premature end of input, or trailing tokens after the document
//! - **Coercion errors**: no conversion path from a parsed value to the
//!   requested target type
//! - **Key lookup errors**: a depth-first key search that found nothing
//!
//! Every error is terminal for the call that raised it; nothing is retried
//! internally and no partial value escapes a failed parse.
//!
//! ## Examples
//!
//! ```rust
//! use lax_json::{from_str, Error};
//!
//! let result = from_str("{\"name\"");
//! assert!(matches!(result, Err(Error::UnexpectedEof { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while tokenizing, parsing,
/// serializing, or coercing values.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed literal or illegal character during tokenization
    #[error("lex error at line {line}, column {col}: {msg}")]
    Lex {
        line: usize,
        col: usize,
        msg: String,
    },

    /// The token stream ended while more input was required
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// A token of the wrong kind appeared where another was required
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// Structural violation that is not an end-of-input or wrong-kind case
    /// (empty input, trailing comma, trailing tokens)
    #[error("parse error: {0}")]
    Parse(String),

    /// A number literal that passed the lexer but cannot be represented
    /// (an integer outside the i64 range)
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),

    /// No coercion path from the parsed value to the requested target type
    #[error("cannot coerce {found} into {target}")]
    Coerce { found: String, target: String },

    /// Depth-first key search yielded nothing
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A Rust type the serializer has no representation for
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Generic message (used by serde trait plumbing)
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a lex error tagged with line and column position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lax_json::Error;
    ///
    /// let err = Error::lex(3, 7, "unterminated string");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn lex(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::Lex {
            line,
            col,
            msg: msg.into(),
        }
    }

    /// Creates an end-of-input error naming what was expected next.
    pub fn eof(expected: impl fmt::Display) -> Self {
        Error::UnexpectedEof {
            expected: expected.to_string(),
        }
    }

    /// Creates a wrong-token-kind error naming both kinds.
    pub fn unexpected_token(expected: impl fmt::Display, found: impl fmt::Display) -> Self {
        Error::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a generic structural parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates a coercion error naming the source and target kinds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lax_json::Error;
    ///
    /// let err = Error::coerce("string", "i64");
    /// assert_eq!(err.to_string(), "cannot coerce string into i64");
    /// ```
    pub fn coerce(found: impl Into<String>, target: impl Into<String>) -> Self {
        Error::Coerce {
            found: found.into(),
            target: target.into(),
        }
    }

    /// Creates a key-not-found error for a failed depth-first search.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound(key.into())
    }

    /// Creates an unsupported-type error for values the serializer cannot
    /// represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
