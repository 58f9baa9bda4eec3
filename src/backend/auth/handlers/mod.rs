//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for account endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Form types and their validation
//! ├── signup.rs   - User registration
//! ├── login.rs    - User authentication
//! ├── logout.rs   - Session teardown
//! └── account.rs  - Account page and password update
//! ```
//!
//! # Handlers
//!
//! - **`signup_page`** / **`signup`** - GET/POST /user/signup
//! - **`login_page`** / **`login`** - GET/POST /user/login
//! - **`logout`** - POST /user/logout
//! - **`account`** - GET /user/account
//! - **`password_update_page`** / **`password_update`** - GET/POST /account/password/update
//!
//! # Authentication Flow
//!
//! 1. **Signup**: Name, email and password → user created → flash → login page
//! 2. **Login**: Email and password verified → token renewed → user ID stored
//! 3. **Logout**: Token renewed → user ID removed → flash → home page

/// Form types
pub mod types;

/// Signup handlers
pub mod signup;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

/// Account handlers
pub mod account;

pub use types::{PasswordUpdateForm, UserLoginForm, UserSignupForm};

pub use account::{account, password_update, password_update_page};
pub use login::{login, login_page};
pub use logout::logout;
pub use signup::{signup, signup_page};
