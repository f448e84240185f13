//! Error handling for the cropcast inference server
//!
//! One structured error type covers the whole request path plus startup.
//! Variants that can reach an HTTP boundary carry an `IntoResponse` mapping;
//! startup failures (`Config`, `Artifact`) abort the process before serving.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the cropcast inference server
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Artifact load failed: {artifact} - {message}")]
    Artifact { artifact: String, message: String },

    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("Dimension mismatch in {stage}: expected {expected} features, got {actual}")]
    DimensionMismatch {
        stage: String,
        expected: usize,
        actual: usize,
    },

    #[error("Inference failed: {message}")]
    Inference { message: String },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Type alias for Result with AdvisorError
pub type AdvisorResult<T> = Result<T, AdvisorError>;

impl AdvisorError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an artifact load error
    pub fn artifact(artifact: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Artifact {
            artifact: artifact.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error for a named form field
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(stage: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            stage: stage.into(),
            expected,
            actual,
        }
    }

    /// Create an inference error
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }
}

impl IntoResponse for AdvisorError {
    fn into_response(self) -> Response {
        let status = match self {
            AdvisorError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            // Everything else is a server-side failure: either a startup
            // error that leaked past bootstrap or a shape invariant broken
            // by mismatched artifacts.
            AdvisorError::Config { .. }
            | AdvisorError::Artifact { .. }
            | AdvisorError::DimensionMismatch { .. }
            | AdvisorError::Inference { .. }
            | AdvisorError::Io { .. }
            | AdvisorError::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

/// Convert from serde_json errors
impl From<serde_json::Error> for AdvisorError {
    fn from(err: serde_json::Error) -> Self {
        AdvisorError::serialization("json_operation", err)
    }
}

/// Convert from std::io errors
impl From<std::io::Error> for AdvisorError {
    fn from(err: std::io::Error) -> Self {
        AdvisorError::io("io_operation", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let input_err = AdvisorError::invalid_input("Nitrogen", "expected a number");
        assert!(input_err.to_string().contains("Nitrogen"));

        let dim_err = AdvisorError::dimension_mismatch("minmax scaler", 7, 3);
        assert!(dim_err.to_string().contains("expected 7"));
        assert!(dim_err.to_string().contains("got 3"));
    }

    #[test]
    fn test_error_chaining() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let advisor_err = AdvisorError::io("reading model.json", io_err);

        assert!(advisor_err.source().is_some());
        assert!(advisor_err.to_string().contains("I/O operation failed"));
    }
}
