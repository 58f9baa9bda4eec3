//! Shared Error Types
//!
//! This module defines the error taxonomy returned by the snippet and
//! credential stores. Handlers pattern-match the expected outcomes
//! (`NoRecord`, `InvalidCredentials`, `DuplicateEmail`) and turn them into
//! page state; every other variant is a store failure and ends the request
//! with a server error.
//!
//! # Error Categories
//!
//! - `NoRecord` - Lookup miss (absent or expired row)
//! - `InvalidCredentials` - Unknown email or wrong password, deliberately
//!   indistinguishable
//! - `DuplicateEmail` - Unique constraint on `users.email` violated
//! - `InvalidExpiry`, `Hashing`, `Database` - Opaque store failures
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Errors produced by the persistence layer
#[derive(Debug, Error)]
pub enum ModelError {
    /// No matching record found
    #[error("models: no matching record found")]
    NoRecord,

    /// Email unknown or password mismatch
    #[error("models: invalid credentials")]
    InvalidCredentials,

    /// Email address already registered
    #[error("models: duplicate email")]
    DuplicateEmail,

    /// Snippet lifetime outside the permitted set
    #[error("models: expiry of {0} days is not permitted")]
    InvalidExpiry(i64),

    /// Password hashing failed
    #[error("models: password hashing failed: {0}")]
    Hashing(String),

    /// Underlying database failure
    #[error("models: database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ModelError {
    /// Create a new hashing error
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing(message.into())
    }
}
