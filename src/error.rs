//! Custom error types for boxoffice-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for box office analysis operations
#[derive(Error, Debug)]
pub enum BoxOfficeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Chart rendering errors
    #[error("Render error: {0}")]
    Render(String),
}

impl BoxOfficeError {
    /// Create a validation error for an empty record set
    pub fn empty_records() -> Self {
        Self::Validation("record set is empty".into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BoxOfficeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BoxOfficeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BoxOfficeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for box office operations
pub type BoxOfficeResult<T> = Result<T, BoxOfficeError>;
