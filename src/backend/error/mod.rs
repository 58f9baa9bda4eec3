//! Backend Error Module
//!
//! Request failures raised by handlers and pipeline stages. Domain outcomes
//! a handler expects (bad credentials, duplicate email, failed validation)
//! never reach this type; they are rendered as form errors instead.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `ClientError` - Malformed input (400-class)
//! - `NotFound` - Unknown route or record
//! - `Model` - Store errors not handled by the handler
//! - `Session` - Session backend failures
//! - `Internal` - Anything else
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`. Client errors answer with their
//! canonical reason phrase; server errors are logged and answer with a
//! generic body, carrying an [`ErrorTrace`] for the debug error stage.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
pub use conversion::ErrorTrace;
