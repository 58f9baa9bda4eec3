/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are returned from handlers and middleware and are converted
 * to HTTP responses in `conversion.rs`.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * Malformed form bodies, malformed path parameters and CSRF failures end
 * the request with a 4xx status and no further detail.
 *
 * ## Model Errors
 *
 * Store errors reaching this type were not handled by the handler:
 * `NoRecord` still maps to 404, everything else is a server error.
 *
 * ## Server Errors
 *
 * Session backend failures and internal errors map to 500. They are logged
 * and their details are only shown to the client in debug mode.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::ModelError;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur while handling a
/// request. Each variant can be converted to an HTTP response.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Client error (e.g., malformed form data or path parameter)
    #[error("client error: {status}")]
    ClientError {
        /// HTTP status code for this error
        status: StatusCode,
    },

    /// No route or record matched the request
    #[error("not found")]
    NotFound,

    /// Store error not handled by the handler
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Session backend error
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal error (e.g., response construction failure)
    #[error("internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new client error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code in the 4xx range
    pub fn client(status: StatusCode) -> Self {
        Self::ClientError { status }
    }

    /// Shorthand for a 400 Bad Request client error
    pub fn bad_request() -> Self {
        Self::client(StatusCode::BAD_REQUEST)
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ClientError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `Model(NoRecord)` - 404 Not Found
    /// - `Model(_)` - 500 Internal Server Error
    /// - `Session` - 500 Internal Server Error
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ClientError { status } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Model(ModelError::NoRecord) => StatusCode::NOT_FOUND,
            Self::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the client
    ///
    /// Server errors never reveal their cause here; the cause is logged and
    /// only surfaced through the debug error stage.
    pub fn message(&self) -> String {
        let status = self.status_code();
        if status.is_server_error() {
            return "Internal Server Error".to_string();
        }
        status
            .canonical_reason()
            .unwrap_or("Error")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error() {
        let error = BackendError::client(StatusCode::BAD_REQUEST);
        match error {
            BackendError::ClientError { status } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
            }
            _ => panic!("Expected ClientError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::bad_request().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BackendError::from(ModelError::NoRecord).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::from(ModelError::Database(sqlx::Error::PoolTimedOut)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BackendError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_error_message_is_generic() {
        let error = BackendError::internal("connection refused on 10.0.0.3");
        assert_eq!(error.message(), "Internal Server Error");
        assert!(error.to_string().contains("10.0.0.3"));
    }

    #[test]
    fn test_client_error_message() {
        assert_eq!(BackendError::bad_request().message(), "Bad Request");
        assert_eq!(BackendError::NotFound.message(), "Not Found");
    }
}
