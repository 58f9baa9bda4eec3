//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router and pipeline assembly
//! └── site_routes.rs  - Ping, static assets, about page, fallback
//! ```
//!
//! Snippet and account handlers live next to their stores in
//! `backend::snippets` and `backend::auth`.

/// Router and pipeline assembly
pub mod router;

/// Session-less site routes
pub mod site_routes;

pub use router::create_router;
