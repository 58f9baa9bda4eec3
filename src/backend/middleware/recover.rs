/**
 * Panic Recovery
 *
 * Converts a panic anywhere below the outermost stage into a 500 response.
 * The response asks the client to close the connection, since the handler
 * may have left the exchange in an unknown state.
 *
 * Panics bypass the debug error stage, so in debug mode the panic message
 * is written into the body here.
 */

use std::any::Any;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Panic handler for `CatchPanicLayer::custom`
///
/// # Arguments
///
/// * `payload` - Value the handler panicked with
/// * `debug` - Expose the panic message in the response body
pub fn recover_panic(payload: Box<dyn Any + Send + 'static>, debug: bool) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "handler panicked");

    let body = if debug {
        format!("panic: {detail}")
    } else {
        "Internal Server Error".to_string()
    };

    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("close"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recover_panic_closes_connection() {
        let response = recover_panic(Box::new("boom"), false);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[header::CONNECTION], "close");
    }

    #[tokio::test]
    async fn test_recover_panic_hides_message_outside_debug() {
        let response = recover_panic(Box::new(String::from("formatted boom")), false);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }

    #[tokio::test]
    async fn test_recover_panic_shows_message_in_debug() {
        let response = recover_panic(Box::new(String::from("formatted boom")), true);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"panic: formatted boom");
    }
}
