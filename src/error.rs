//! Error types for the Versecraft library.
//!
//! All errors are represented by the [`VersecraftError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use versecraft::error::{Result, VersecraftError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VersecraftError::analysis("No lines to analyze"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Versecraft operations.
///
/// This enum represents all possible errors that can occur in the Versecraft
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum VersecraftError {
    /// I/O errors (reading poem files, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (empty input, invalid target range)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generation-related errors (invalid parameters)
    #[error("Generation error: {0}")]
    Generation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VersecraftError.
pub type Result<T> = std::result::Result<T, VersecraftError>;

impl VersecraftError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VersecraftError::Analysis(msg.into())
    }

    /// Create a new generation error.
    pub fn generation<S: Into<String>>(msg: S) -> Self {
        VersecraftError::Generation(msg.into())
    }

    /// Create a new empty-input error.
    ///
    /// Returned by the analyzer when the text holds no non-blank lines.
    pub fn empty_input() -> Self {
        VersecraftError::Analysis("No lines to analyze".to_string())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VersecraftError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VersecraftError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VersecraftError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = VersecraftError::generation("Test generation error");
        assert_eq!(error.to_string(), "Generation error: Test generation error");

        let error = VersecraftError::invalid_argument("bad range");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad range");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let versecraft_error = VersecraftError::from(io_error);

        match versecraft_error {
            VersecraftError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
