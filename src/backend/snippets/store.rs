/**
 * Snippet Store
 *
 * This module defines the snippet persistence contract and its SQLite
 * implementation. Every operation is a single parameterized statement;
 * expiry filtering happens in the query itself.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::snippet::{expiry_from, is_permitted_expiry};
use crate::shared::{ModelError, Snippet};

/// Maximum number of snippets returned by [`SnippetStore::latest`]
pub const LATEST_LIMIT: i64 = 10;

/// Snippet persistence operations
///
/// Handlers only depend on this trait so that tests can substitute an
/// in-memory implementation.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Store a new snippet expiring `expires_days` days from now
    ///
    /// # Errors
    /// * `InvalidExpiry` - If `expires_days` is not 1, 7 or 365
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_days: i64,
    ) -> Result<i64, ModelError>;

    /// Fetch a live snippet by ID
    ///
    /// # Errors
    /// * `NoRecord` - If the snippet does not exist or has expired
    async fn get(&self, id: i64) -> Result<Snippet, ModelError>;

    /// Up to ten live snippets, most recently inserted first
    async fn latest(&self) -> Result<Vec<Snippet>, ModelError>;
}

/// SQLite-backed snippet store
#[derive(Clone, Debug)]
pub struct SqliteSnippetStore {
    pool: SqlitePool,
}

impl SqliteSnippetStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetStore for SqliteSnippetStore {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_days: i64,
    ) -> Result<i64, ModelError> {
        if !is_permitted_expiry(expires_days) {
            return Err(ModelError::InvalidExpiry(expires_days));
        }

        let created = Utc::now();
        let expires = expiry_from(created, expires_days);

        let result = sqlx::query(
            r#"
            INSERT INTO snippets (title, content, created, expires)
            VALUES (?, ?, ?, ?)
            "#
        )
        .bind(title)
        .bind(content)
        .bind(created)
        .bind(expires)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Snippet, ModelError> {
        let snippet = sqlx::query_as::<_, Snippet>(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > ? AND id = ?
            "#
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        snippet.ok_or(ModelError::NoRecord)
    }

    async fn latest(&self) -> Result<Vec<Snippet>, ModelError> {
        let snippets = sqlx::query_as::<_, Snippet>(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > ?
            ORDER BY id DESC
            LIMIT ?
            "#
        )
        .bind(Utc::now())
        .bind(LATEST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(snippets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_in_memory;
    use assert_matches::assert_matches;
    use chrono::Duration;

    async fn store() -> SqliteSnippetStore {
        let pool = connect_in_memory().await.expect("in-memory database");
        SqliteSnippetStore::new(pool)
    }

    async fn insert_expired(store: &SqliteSnippetStore, title: &str) -> i64 {
        let created = Utc::now() - Duration::days(8);
        sqlx::query(
            "INSERT INTO snippets (title, content, created, expires) VALUES (?, 'old', ?, ?)",
        )
        .bind(title)
        .bind(created)
        .bind(created + Duration::days(7))
        .execute(&store.pool)
        .await
        .unwrap()
        .last_insert_rowid()
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = store().await;
        let id = store
            .insert("O snail", "Climb Mount Fuji,\nBut slowly, slowly!", 7)
            .await
            .unwrap();

        let snippet = store.get(id).await.unwrap();
        assert_eq!(snippet.id, id);
        assert_eq!(snippet.title, "O snail");
        assert_eq!(snippet.expires - snippet.created, Duration::days(7));
    }

    #[tokio::test]
    async fn test_insert_rejects_unlisted_expiry() {
        let store = store().await;
        let result = store.insert("title", "content", 30).await;
        assert_matches!(result, Err(ModelError::InvalidExpiry(30)));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = store().await;
        assert_matches!(store.get(42).await, Err(ModelError::NoRecord));
    }

    #[tokio::test]
    async fn test_get_expired() {
        let store = store().await;
        let id = insert_expired(&store, "gone").await;
        assert_matches!(store.get(id).await, Err(ModelError::NoRecord));
    }

    #[tokio::test]
    async fn test_latest_limits_and_orders() {
        let store = store().await;
        insert_expired(&store, "gone").await;
        let mut ids = Vec::new();
        for i in 0..12 {
            ids.push(store.insert(&format!("snippet {i}"), "body", 1).await.unwrap());
        }

        let latest = store.latest().await.unwrap();
        assert_eq!(latest.len(), 10);
        assert_eq!(latest[0].id, *ids.last().unwrap());
        assert!(latest.windows(2).all(|w| w[0].id > w[1].id));
        let now = Utc::now();
        assert!(latest.iter().all(|s| s.expires > now));
    }
}
