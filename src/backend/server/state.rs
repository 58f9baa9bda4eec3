/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the dependency-injection container handed to
 * every handler and middleware stage. It holds:
 * - The snippet store
 * - The credential store
 * - The validated application configuration
 *
 * Stores are trait objects so that tests can substitute in-memory
 * implementations at composition time.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::users::UserStore;
use crate::backend::snippets::store::SnippetStore;
use crate::shared::AppConfig;

/// Shared snippet store handle
pub type SnippetStoreRef = Arc<dyn SnippetStore>;

/// Shared credential store handle
pub type UserStoreRef = Arc<dyn UserStore>;

/// Application state shared by all requests
///
/// # Fields
///
/// * `snippets` - Snippet persistence
/// * `users` - Credential persistence
/// * `config` - Runtime configuration (debug mode, cookie settings)
///
/// # Thread Safety
///
/// Both stores are `Send + Sync` and pool their own connections, so the
/// state is cloned per request without locking.
#[derive(Clone)]
pub struct AppState {
    pub snippets: SnippetStoreRef,
    pub users: UserStoreRef,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(snippets: SnippetStoreRef, users: UserStoreRef, config: AppConfig) -> Self {
        Self {
            snippets,
            users,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SnippetStoreRef {
    fn from_ref(state: &AppState) -> Self {
        state.snippets.clone()
    }
}

impl FromRef<AppState> for UserStoreRef {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
