//! # Error Types
//!
//! Structured error types for beam_core. Every failure is detected before
//! numeric work begins, so a solve either returns a full response or one of
//! these errors, never a partial result.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if length <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "beam.length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for beam solves and their file plumbing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (span length, rigidity, load parameters)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A parameter required by the selected configuration is absent or unusable
    #[error("Missing required parameter '{parameter}': {reason}")]
    MissingParameter { parameter: String, reason: String },

    /// The support-type tag is not one the engine knows
    #[error("Unsupported beam configuration: {beam_type}")]
    UnsupportedConfiguration { beam_type: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingParameter error
    pub fn missing_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::MissingParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedConfiguration error
    pub fn unsupported_configuration(beam_type: impl Into<String>) -> Self {
        CalcError::UnsupportedConfiguration {
            beam_type: beam_type.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether the error comes from the caller's request rather than the environment.
    ///
    /// Solves are deterministic, so a request error reproduces on every retry.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingParameter { .. }
                | CalcError::UnsupportedConfiguration { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingParameter { .. } => "MISSING_PARAMETER",
            CalcError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}
