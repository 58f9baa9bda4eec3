//! Views Module
//!
//! Server-rendered pages built with `maud`. All interpolated values are
//! HTML-escaped by the macro.
//!
//! # Module Structure
//!
//! ```text
//! views/
//! ├── mod.rs       - Render helpers
//! ├── context.rs   - Per-request template context
//! ├── layout.rs    - Base layout and form fragments
//! ├── snippets.rs  - Listing, detail and creation pages
//! ├── auth.rs      - Signup, login and account pages
//! └── pages.rs     - Static pages
//! ```

/// Per-request template context
pub mod context;

/// Base layout and form fragments
pub mod layout;

/// Snippet pages
pub mod snippets;

/// Account pages
pub mod auth;

/// Static pages
pub mod pages;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::Markup;

pub use context::{human_date, PageContext, TemplateData};

/// Render a page with 200 OK
pub fn render(markup: Markup) -> Response {
    render_with_status(StatusCode::OK, markup)
}

/// Render a page with an explicit status (422 for failed validation)
pub fn render_with_status(status: StatusCode, markup: Markup) -> Response {
    (status, Html(markup.into_string())).into_response()
}
