//! Error types for the fundi client libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, backend, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for fundi operations.
///
/// This error type covers all possible failure modes in the client,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    /// No response was received; these are never retried automatically.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors that end the session.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-2xx responses from the backend.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid base URL, malformed token).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Durable session storage failed.
    #[error("session storage error: {0}")]
    Storage(#[source] std::io::Error),
}

impl Error {
    /// True if this error is the terminal logged-out state.
    ///
    /// When this returns true the session store has already been cleared
    /// and the user must authenticate again.
    pub fn is_logged_out(&self) -> bool {
        matches!(
            self,
            Error::Auth(AuthError::LoggedOut { .. }) | Error::Auth(AuthError::RefreshFailed(_))
        )
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
///
/// Both variants correspond to the hard-logout outcome: by the time one of
/// these is returned the session store has been cleared.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the credential and no recovery was possible
    /// (no refresh token stored, or the retried request was rejected again).
    #[error("session rejected: {source}")]
    LoggedOut {
        #[source]
        source: ApiError,
    },

    /// A credential refresh was attempted and failed.
    #[error("session refresh failed: {0}")]
    RefreshFailed(#[source] Box<Error>),
}

/// A non-2xx response from the backend.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code, when the backend provides one.
    pub code: Option<String>,
    /// Human-readable message. Always non-empty: the backend's
    /// `detail`/`message` verbatim when present, otherwise a generic
    /// message for the status class.
    pub message: String,
}

impl ApiError {
    /// Build an error from a status code and the optional fields of the
    /// backend's error body.
    pub fn new(status: u16, code: Option<String>, detail: Option<String>) -> Self {
        let message = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| Self::generic_message(status));
        Self {
            status,
            code,
            message,
        }
    }

    fn generic_message(status: u16) -> String {
        let class = match status {
            401 => "authentication required",
            403 => "permission denied",
            404 => "not found",
            400..=499 => "request rejected by the server",
            500..=599 => "server error",
            _ => "unexpected response",
        };
        format!("{} (HTTP {})", class, status)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid backend base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// A token contains characters that cannot appear in an HTTP header.
    #[error("token is not a valid header value")]
    Token,

    /// An attachment declares an unparseable MIME type.
    #[error("invalid content type '{value}'")]
    ContentType { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_backend_detail() {
        let err = ApiError::new(400, None, Some("Insufficient balance".to_string()));
        assert_eq!(err.message, "Insufficient balance");
        assert_eq!(err.to_string(), "HTTP 400: Insufficient balance");
    }

    #[test]
    fn api_error_falls_back_to_generic_message() {
        let err = ApiError::new(503, None, None);
        assert!(!err.message.is_empty());
        assert!(err.message.contains("503"));
    }

    #[test]
    fn api_error_treats_blank_detail_as_absent() {
        let err = ApiError::new(500, None, Some("   ".to_string()));
        assert!(!err.message.trim().is_empty());
        assert!(err.message.contains("server error"));
    }

    #[test]
    fn logged_out_is_terminal() {
        let err = Error::Auth(AuthError::LoggedOut {
            source: ApiError::new(401, None, None),
        });
        assert!(err.is_logged_out());

        let err = Error::Api(ApiError::new(401, None, None));
        assert!(!err.is_logged_out());
    }
}
