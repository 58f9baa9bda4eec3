//! Middleware Module
//!
//! This module contains the request pipeline stages. Each stage wraps the
//! next and either calls it or short-circuits with a response.
//!
//! # Pipeline
//!
//! ```text
//! recover          - panic → 500, Connection: close
//! └─ logging       - one info event per request
//!    └─ errors     - debug-mode error bodies
//!       └─ headers - fixed security headers
//!          └─ session load/save (tower-sessions)
//!             └─ csrf     - anti-forgery token check
//!                └─ auth  - authentication resolution
//!                   └─ routes (+ auth gate on protected routes)
//! ```

/// Authentication resolution and gate
pub mod auth;

/// Anti-forgery token check
pub mod csrf;

/// Debug error pages
pub mod errors;

/// Security response headers
pub mod headers;

/// Request logging
pub mod logging;

/// Panic recovery
pub mod recover;

pub use auth::{authenticate, require_authentication, AuthUser, AuthenticatedUser};
pub use csrf::{csrf_protect, CsrfToken};
pub use errors::expose_errors;
pub use headers::{secure_headers, CONTENT_SECURITY_POLICY};
pub use logging::log_request;
pub use recover::recover_panic;
