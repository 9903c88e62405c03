//! Error types for I/O operations.
//!
//! Distinguishes malformed headers, malformed tokens, short input and
//! failures of the underlying stream.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying stream failed (read, write or flush).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header is not a valid P2 header (bad magic, zero width or height).
    #[error("format error: {0}")]
    Format(String),

    /// A token where a number was expected could not be parsed.
    #[error("parse error on line {line}: expected {expected}, got {token:?}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
        /// What the parser was looking for
        expected: &'static str,
    },

    /// Input ended before the header or pixel grid was complete.
    #[error("truncated input: expected {expected} values, got {got}")]
    Truncated {
        /// Values required
        expected: usize,
        /// Values actually read
        got: usize,
    },

    /// Image buffer error (allocation, bounds).
    #[error(transparent)]
    Image(#[from] gray_core::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl IoError {
    /// Returns `true` for header format errors.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
