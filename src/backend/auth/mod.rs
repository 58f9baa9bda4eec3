//! Authentication Module
//!
//! This module handles user registration, login and session state.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - Credential store (trait + SQLite implementation)
//! - **`sessions`** - Request-scoped session state
//! - **`handlers`** - HTTP handlers for account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - UserStore and password hashing
//! ├── sessions.rs     - SessionState and session keys
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Only an opaque token travels in the session cookie
//! - The token is renewed on login and logout
//! - Invalid credentials produce one generic message

/// Credential store
pub mod users;

/// Session state
pub mod sessions;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use sessions::SessionState;
pub use users::{SqliteUserStore, UserStore};
