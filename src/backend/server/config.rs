/**
 * Server Configuration
 *
 * This module handles the database connection and the session store
 * backing the session layer.
 *
 * # Configuration Sources
 *
 * The connection string comes from [`AppConfig::database_url`], which the
 * binary fills from `--dsn` or `DATABASE_URL`.
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: connection and
 * migration failures are returned to the caller and abort startup.
 *
 * [`AppConfig::database_url`]: crate::shared::AppConfig
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tower_sessions_sqlx_store::SqliteStore;

/// Open a connection pool and apply pending migrations
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite://snipbox.db`)
///
/// # Errors
///
/// Returns an error if the URL is malformed, the database cannot be opened,
/// or a migration fails.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Open a private in-memory database with the schema applied
///
/// The pool holds a single connection that never expires, since every
/// connection to `:memory:` sees its own empty database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Create the persistent session store on the application's pool
///
/// # Errors
///
/// Returns an error if the session table cannot be created.
pub async fn session_store(pool: SqlitePool) -> Result<SqliteStore, sqlx::Error> {
    let store = SqliteStore::new(pool);
    store.migrate().await?;
    Ok(store)
}
