//! Error types for HTTP client operations.
//!
//! This module contains error types for the HTTP request/response cycle.
//! Note that HTTP status codes are never errors here: any response the
//! server produces, 2xx or otherwise, is returned as a normal
//! [`HttpResponse`](crate::clients::HttpResponse). Only requests that are
//! malformed before dispatch or that fail at the transport level produce
//! an [`HttpError`].

use thiserror::Error;

/// Error for invalid HTTP request configurations.
///
/// These errors are raised by request validation before any network
/// activity takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body is required for this HTTP method but none was provided.
    #[error("A body is required for {method} requests")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A body was provided for an HTTP method that never sends one.
    #[error("A body is not allowed for {method} requests")]
    BodyNotAllowed {
        /// The HTTP method that forbids a body.
        method: String,
    },
}

/// Errors that can occur during HTTP operations.
///
/// This is the top-level error type for the executor. It unifies request
/// validation failures and transport-level failures (connection refused,
/// DNS resolution, timeout). Server responses are never converted into
/// this type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request failed validation before dispatch.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A network or transport error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if this error was caused by a request timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_body_error_message() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "A body is required for post requests");
    }

    #[test]
    fn test_body_not_allowed_error_message() {
        let error = InvalidHttpRequestError::BodyNotAllowed {
            method: "get".to_string(),
        };
        assert_eq!(error.to_string(), "A body is not allowed for get requests");
    }

    #[test]
    fn test_invalid_request_converts_to_http_error() {
        let invalid = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        let error: HttpError = invalid.into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = HttpError::InvalidRequest(InvalidHttpRequestError::BodyNotAllowed {
            method: "get".to_string(),
        });
        let _: &dyn std::error::Error = &error;
    }
}
