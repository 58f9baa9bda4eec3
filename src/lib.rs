//! Snipbox - Main Library
//!
//! Snipbox is a server-rendered web application for sharing short text
//! snippets, with account management (signup, login, logout, password
//! update) backed by SQLite.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types that do not depend on the HTTP server
//!   - Snippet and user records
//!   - Store error taxonomy
//!   - Form validation
//!   - Application configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and request pipeline
//!   - Snippet and credential stores
//!   - Session state, CSRF protection, authentication
//!   - Page rendering
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Server-side code: Axum, sessions, bcrypt, maud
//!
//! # Request Pipeline
//!
//! Every request passes through panic recovery, request logging, security
//! headers, session load/save, CSRF protection and authentication
//! resolution before reaching its handler. Protected routes add an
//! authentication gate that redirects anonymous visitors to the login page.
//!
//! # Error Handling
//!
//! - `shared::ModelError` for store outcomes
//! - `backend::BackendError` for request failures, convertible to responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
