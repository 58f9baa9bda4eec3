/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are plain text carrying the status' canonical reason.
 * Server errors are logged here. The error's `Display` and `Debug`
 * renderings and a captured stack backtrace are attached to the response
 * as an [`ErrorTrace`] extension, which the debug error stage exposes when
 * the server runs with `--debug`.
 */

use std::backtrace::Backtrace;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use crate::backend::error::types::BackendError;

/// Detailed description of a server error, carried in response extensions
#[derive(Clone, Debug)]
pub struct ErrorTrace(pub String);

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(error = %self, detail = ?self, "server error");
        }

        let mut response = (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response();

        if status.is_server_error() {
            response
                .extensions_mut()
                .insert(ErrorTrace(format!(
                    "{self}\n\n{self:#?}\n\nstack backtrace:\n{}",
                    Backtrace::force_capture()
                )));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use crate::shared::ModelError;

    #[test]
    fn test_not_found_response() {
        let response = BackendError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<ErrorTrace>().is_none());
    }

    #[test]
    fn test_server_error_carries_trace() {
        let response = BackendError::from(ModelError::hashing("cost too high")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let trace = response
            .extensions()
            .get::<ErrorTrace>()
            .expect("server errors carry a trace");
        assert!(trace.0.contains("cost too high"));
        assert!(trace.0.contains("Hashing"));
        assert!(trace.0.contains("stack backtrace:"));
    }
}
