//! Error types for the Lexique library.
//!
//! All fallible operations in Lexique return [`Result`], whose error type is
//! the [`LexiqueError`] enum. The only failure surface of the core is corpus
//! loading; filters are pure and total and never fail.
//!
//! # Examples
//!
//! ```
//! use lexique::error::{LexiqueError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexiqueError::invalid_argument("empty letter list"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexique operations.
///
/// A missing or unreadable corpus file surfaces as [`LexiqueError::Io`]
/// (callers can inspect the underlying [`io::ErrorKind`], e.g. `NotFound`).
/// Corpus bytes that are not valid UTF-8 surface as
/// [`LexiqueError::Decoding`]. No error is retried or recovered locally.
#[derive(Error, Debug)]
pub enum LexiqueError {
    /// I/O errors (opening or reading a corpus file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The corpus bytes are not valid UTF-8.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// JSON serialization/deserialization errors (criteria files, output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`LexiqueError`].
pub type Result<T> = std::result::Result<T, LexiqueError>;

impl LexiqueError {
    /// Create a new decoding error.
    pub fn decoding<S: Into<String>>(msg: S) -> Self {
        LexiqueError::Decoding(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiqueError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexiqueError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
