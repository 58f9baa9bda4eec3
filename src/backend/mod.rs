//! Backend Module
//!
//! This module contains all server-side code for Snippetbox: an Axum HTTP
//! server rendering snippet pages and managing user accounts.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Snippet and credential stores (SQLite)
//! - Session-backed authentication with CSRF protection
//! - Server-rendered pages
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`snippets`** - Snippet store and handlers
//! - **`auth`** - Credential store, session state, account handlers
//! - **`middleware`** - Request pipeline stages
//! - **`views`** - Page rendering and template context
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── snippets/       - Snippets
//! ├── auth/           - Accounts and sessions
//! ├── middleware/     - Request pipeline
//! ├── views/          - HTML pages
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the two stores as trait objects and
//! the application configuration. There is no other in-process mutable
//! state; per-visitor data lives in the session store.
//!
//! # Error Handling
//!
//! Handlers return `Result<Response, BackendError>`. Expected domain
//! outcomes are matched at the handler and turned into form errors or
//! redirects; everything else becomes a logged 500.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Snippet store and handlers
#[cfg(feature = "ssr")]
pub mod snippets;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Page rendering
#[cfg(feature = "ssr")]
pub mod views;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState};
#[cfg(feature = "ssr")]
pub use routes::create_router;
#[cfg(feature = "ssr")]
pub use error::BackendError;
