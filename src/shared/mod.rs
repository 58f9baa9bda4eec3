//! Shared Module
//!
//! This module contains types and data structures that do not depend on the
//! HTTP server: the persisted records, the store error taxonomy, form
//! validation rules and application configuration.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! by the server, by tests and by tooling without pulling in the `ssr`
//! feature.

/// Snippet record
pub mod snippet;

/// User record
pub mod user;

/// Store error types
pub mod error;

/// Form validation
pub mod validator;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use snippet::{Snippet, DEFAULT_EXPIRY_DAYS, PERMITTED_EXPIRY_DAYS};
pub use user::User;
pub use error::ModelError;
pub use validator::Validator;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
