/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and apply migrations
 * 2. Create the persistent session store
 * 3. Build the stores and application state
 * 4. Start the expired-session cleanup task
 * 5. Create and configure the router
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_sessions::session_store::ExpiredDeletion;

use crate::backend::auth::users::SqliteUserStore;
use crate::backend::error::BackendError;
use crate::backend::routes::create_router;
use crate::backend::server::config::{connect, session_store};
use crate::backend::server::state::AppState;
use crate::backend::snippets::store::SqliteSnippetStore;
use crate::shared::AppConfig;

/// Interval between sweeps of expired sessions
pub const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Errors
///
/// Returns an error if the database or the session table cannot be set up.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing snipbox server");

    let pool = connect(&config.database_url)
        .await
        .map_err(|e| BackendError::internal(format!("database setup failed: {e}")))?;

    let sessions = session_store(pool.clone())
        .await
        .map_err(|e| BackendError::internal(format!("session store setup failed: {e}")))?;

    let app_state = AppState::new(
        Arc::new(SqliteSnippetStore::new(pool.clone())),
        Arc::new(SqliteUserStore::new(pool)),
        config,
    );

    let cleanup_store = sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match cleanup_store.delete_expired().await {
                Ok(()) => tracing::debug!("Deleted expired sessions"),
                Err(e) => tracing::error!(error = %e, "Failed to delete expired sessions"),
            }
        }
    });

    let app = create_router(app_state, sessions);

    tracing::info!("Router configured with periodic session cleanup task");

    Ok(app)
}
