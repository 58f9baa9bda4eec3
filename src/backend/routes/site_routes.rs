/**
 * Site Route Handlers
 *
 * This module defines the routes that do not touch the session: the
 * liveness check and the embedded static assets. It also holds the about
 * page and the not-found fallback.
 *
 * # Routes
 *
 * - `GET /ping` - Liveness check, body `OK`
 * - `GET /static/{*path}` - Embedded CSS and JavaScript
 * - `GET /about` - Static informational page (session-aware)
 */

use axum::{
    extract::Path,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::views::{self, render, PageContext};

/// Assets compiled into the binary: (path under `/static/`, content type, body)
const ASSETS: &[(&str, &str, &str)] = &[
    (
        "css/main.css",
        "text/css; charset=utf-8",
        include_str!("../../../static/css/main.css"),
    ),
    (
        "js/main.js",
        "text/javascript; charset=utf-8",
        include_str!("../../../static/js/main.js"),
    ),
];

/// Configure session-less site routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
pub fn configure_site_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/ping", get(ping))
        .route("/static/{*path}", get(static_asset))
}

/// Liveness check
pub async fn ping() -> &'static str {
    "OK"
}

/// About page
pub async fn about(page: PageContext) -> Result<Response, BackendError> {
    let data = page.template_data().await?;
    Ok(render(views::pages::about(&data)))
}

/// Serve an embedded asset
///
/// # Errors
///
/// * `NotFound` - If no asset is embedded under `path`
pub async fn static_asset(Path(path): Path<String>) -> Result<Response, BackendError> {
    let (_, content_type, body) = ASSETS
        .iter()
        .copied()
        .find(|(asset, _, _)| *asset == path)
        .ok_or(BackendError::NotFound)?;

    let mut response = body.into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    Ok(response)
}

/// Fallback for unknown routes
pub async fn not_found() -> BackendError {
    BackendError::NotFound
}
