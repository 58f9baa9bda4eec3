//! Server Module
//!
//! This module contains server initialization, configuration and state
//! management.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports and documentation
//! ├── state.rs    - AppState and FromRef implementations
//! ├── config.rs   - Database pool and session store setup
//! └── init.rs     - Application construction
//! ```

/// Application state
pub mod state;

/// Database and session store setup
pub mod config;

/// Application construction
pub mod init;

pub use init::create_app;
pub use state::AppState;
