//! Error types for rollo-manifest

use thiserror::Error;

/// Result type alias using rollo-manifest Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing manifest text
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpected character during lexing
    #[error("Unexpected character '{ch}' at line {line}, column {column}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
    },

    /// String literal with no closing quote
    #[error("Unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString {
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
    },

    /// Parser found a token it did not expect
    #[error("Expected {expected} but found {found} at line {line}, column {column}")]
    UnexpectedToken {
        /// What the parser was looking for
        expected: String,
        /// What it found instead
        found: String,
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
    },

    /// A top-level binding has the wrong shape (e.g. `deps` is not a dict)
    #[error("Binding '{binding}' must be a dict, found {found}")]
    InvalidBinding {
        /// Name of the top-level binding
        binding: String,
        /// Short description of the value found
        found: String,
    },
}
