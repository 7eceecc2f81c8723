//! Error types for ewaste.
//!
//! This module defines all error types used throughout the ewaste crate,
//! carrying the offending value or path so messages are actionable.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ewaste operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Item Errors ===
    /// A purchase date was not in `YYYY-MM-DD` form.
    #[error("invalid purchase date '{value}' (expected YYYY-MM-DD): {source}")]
    DateParse {
        /// The text that failed to parse.
        value: String,
        /// The underlying error.
        #[source]
        source: chrono::ParseError,
    },

    /// The expected lifetime pushes the replacement date past the calendar range.
    #[error("expected lifetime of {expected_lifetime} years is out of range for '{name}'")]
    LifetimeOutOfRange {
        /// Name of the item being constructed.
        name: String,
        /// The offending lifetime in years.
        expected_lifetime: i64,
    },

    // === Data File Errors ===
    /// A record in the data file is missing a field or has the wrong type.
    #[error("malformed record at index {index}: {source}")]
    MalformedRecord {
        /// Position of the record in the stored array.
        index: usize,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read the data file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path of the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the data file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ewaste operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a date parse error for the given input.
    #[must_use]
    pub fn date_parse(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParse {
            value: value.into(),
            source,
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from a malformed purchase date.
    #[must_use]
    pub fn is_date_parse_error(&self) -> bool {
        matches!(self, Self::DateParse { .. })
    }

    /// Check if this error came from a record with a bad shape.
    #[must_use]
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}
