//! Error types for the dictsearch library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`DictError`] enum. Expected conditions such as an empty query or a text
//! without matches are not errors and never surface here.
//!
//! # Examples
//!
//! ```
//! use dictsearch::error::{DictError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DictError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for dictsearch operations.
#[derive(Error, Debug)]
pub enum DictError {
    /// I/O errors (reading entry files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested search field is not one of `headword`, `variant`, `definitions`.
    #[error("Unsupported field: {0}")]
    UnsupportedField(String),

    /// Query-related errors.
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid argument supplied by the caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DictError.
pub type Result<T> = std::result::Result<T, DictError>;

impl DictError {
    /// Create a new unsupported field error.
    pub fn unsupported_field<S: Into<String>>(field: S) -> Self {
        DictError::UnsupportedField(field.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        DictError::Query(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DictError::InvalidArgument(msg.into())
    }
}
