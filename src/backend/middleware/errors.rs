/**
 * Debug Error Pages
 *
 * In debug mode, server error responses carrying an [`ErrorTrace`] have
 * their generic body replaced with the trace. Outside debug mode the stage
 * passes responses through untouched.
 */

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::backend::error::ErrorTrace;
use crate::shared::AppConfig;

/// Debug error stage
pub async fn expose_errors(
    State(config): State<Arc<AppConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !config.debug || !response.status().is_server_error() {
        return response;
    }

    let Some(ErrorTrace(trace)) = response.extensions().get::<ErrorTrace>().cloned() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(trace))
}
