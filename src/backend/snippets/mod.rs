//! Snippets Module
//!
//! This module handles snippet persistence and the public snippet pages.
//!
//! # Module Structure
//!
//! ```text
//! snippets/
//! ├── mod.rs      - Module exports
//! ├── store.rs    - SnippetStore trait and SQLite implementation
//! ├── types.rs    - Creation form
//! └── handlers.rs - HTTP handlers
//! ```

/// Snippet persistence
pub mod store;

/// Form types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{home, snippet_create, snippet_create_post, snippet_view};
pub use store::{SnippetStore, SqliteSnippetStore};
