//! Error handling module
//!
//! Defines the error taxonomy returned by every client operation

use std::time::Duration;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum AndromedaError {
    /// Input validation failed, no request was sent
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending input field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// Request could not be constructed
    #[error("internal error: {0}")]
    Internal(String),

    /// HTTP client error (connection refused, body read failure, ...)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Request did not complete within the time budget
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Caller cancelled the request
    #[error("request cancelled")]
    Cancelled,

    /// Provider rejected the request (HTTP 400)
    #[error("{message}")]
    Provider {
        /// Provider supplied description
        message: String,
        /// Provider result code (`SpResultCode`)
        code: i64,
    },

    /// Any other non-success status
    #[error("request failed")]
    RequestFailed {
        /// HTTP status code returned by the provider
        status: u16,
    },

    /// Response body could not be parsed
    #[error("failed to parse provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AndromedaError {
    /// Get error kind string
    pub fn kind(&self) -> &'static str {
        match self {
            AndromedaError::Validation { .. } => "validation_error",
            AndromedaError::Internal(_) => "internal_error",
            AndromedaError::HttpClient(_) => "transport_error",
            AndromedaError::Timeout(_) => "timeout_error",
            AndromedaError::Cancelled => "cancelled",
            AndromedaError::Provider { .. } => "provider_error",
            AndromedaError::RequestFailed { .. } => "request_failed",
            AndromedaError::Decode(_) => "decode_error",
        }
    }

    /// Whether the failure happened below the provider (network, timeout, cancellation)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AndromedaError::HttpClient(_) | AndromedaError::Timeout(_) | AndromedaError::Cancelled
        )
    }

    /// Whether the provider answered with an error status
    pub fn is_provider(&self) -> bool {
        matches!(
            self,
            AndromedaError::Provider { .. } | AndromedaError::RequestFailed { .. }
        )
    }

    /// Provider result code, present only for HTTP 400 responses
    pub fn provider_code(&self) -> Option<i64> {
        match self {
            AndromedaError::Provider { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias
pub type AndromedaResult<T> = Result<T, AndromedaError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create validation error
    pub fn validation_error(field: &'static str, message: impl Into<String>) -> AndromedaError {
        AndromedaError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create internal error
    pub fn internal_error(message: impl Into<String>) -> AndromedaError {
        AndromedaError::Internal(message.into())
    }
}

/// Error context extension trait
pub trait ErrorContext<T> {
    /// Add internal error context
    fn internal_context(self, message: &str) -> AndromedaResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn internal_context(self, message: &str) -> AndromedaResult<T> {
        self.map_err(|e| AndromedaError::Internal(format!("{}: {}", message, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(helpers::validation_error("siteId", "must not be empty").kind(), "validation_error");
        assert_eq!(AndromedaError::Cancelled.kind(), "cancelled");
        assert_eq!(AndromedaError::Timeout(Duration::from_secs(5)).kind(), "timeout_error");
        assert_eq!(AndromedaError::RequestFailed { status: 502 }.kind(), "request_failed");
        assert_eq!(helpers::internal_error("boom").kind(), "internal_error");
    }

    #[test]
    fn test_provider_message_is_description() {
        let err = AndromedaError::Provider {
            message: "bad site".to_string(),
            code: 7,
        };
        assert_eq!(err.to_string(), "bad site");
        assert_eq!(err.provider_code(), Some(7));
        assert!(err.is_provider());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_request_failed_description_is_fixed() {
        let err = AndromedaError::RequestFailed { status: 500 };
        assert_eq!(err.to_string(), "request failed");
        assert_eq!(err.provider_code(), None);
    }

    #[test]
    fn test_validation_message_names_field() {
        let err = helpers::validation_error("apiKey", "must not be empty");
        assert_eq!(err.to_string(), "invalid apiKey: must not be empty");
    }

    #[test]
    fn test_error_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "broken"
        ));

        match result.internal_context("Failed to build request") {
            Err(AndromedaError::Internal(msg)) => {
                assert!(msg.contains("Failed to build request"));
                assert!(msg.contains("broken"));
            }
            _ => panic!("Expected internal error"),
        }
    }

    #[test]
    fn test_transport_classification() {
        assert!(AndromedaError::Cancelled.is_transport());
        assert!(AndromedaError::Timeout(Duration::from_millis(10)).is_transport());
        assert!(!helpers::validation_error("host", "x").is_transport());
    }
}
