/**
 * Credential Store
 *
 * This module handles user records and password verification.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at cost 12 before storage
 * - Unknown emails and wrong passwords both yield `InvalidCredentials`
 * - The hash is never returned by `get`
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::{ModelError, User};

/// bcrypt work factor used for stored passwords
pub const PASSWORD_COST: u32 = 12;

/// Credential persistence operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user with a freshly hashed password
    ///
    /// # Errors
    /// * `DuplicateEmail` - If the email is already registered
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), ModelError>;

    /// Verify an email/password pair and return the user ID
    ///
    /// # Errors
    /// * `InvalidCredentials` - If the email is unknown or the password does not match
    async fn authenticate(&self, email: &str, password: &str) -> Result<i64, ModelError>;

    /// Whether a user with this ID exists
    async fn exists(&self, id: i64) -> Result<bool, ModelError>;

    /// Fetch a user by ID, without the password hash
    ///
    /// # Errors
    /// * `NoRecord` - If no such user exists
    async fn get(&self, id: i64) -> Result<User, ModelError>;

    /// Replace the password after re-verifying the current one
    ///
    /// # Errors
    /// * `InvalidCredentials` - If `old_password` does not match
    /// * `NoRecord` - If no such user exists
    async fn update_password(
        &self,
        id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ModelError>;
}

/// SQLite-backed credential store
#[derive(Clone, Debug)]
pub struct SqliteUserStore {
    pool: SqlitePool,
    cost: u32,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool, cost: PASSWORD_COST }
    }

    /// Override the bcrypt cost (tests use the minimum)
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    fn hash(&self, password: &str) -> Result<String, ModelError> {
        bcrypt::hash(password, self.cost).map_err(|e| ModelError::hashing(e.to_string()))
    }
}

/// Compare a plaintext password with a stored bcrypt hash
fn verify(password: &str, hashed: &str) -> Result<bool, ModelError> {
    match bcrypt::verify(password, hashed) {
        Ok(matched) => Ok(matched),
        Err(bcrypt::BcryptError::InvalidHash(_)) => Ok(false),
        Err(e) => Err(ModelError::hashing(e.to_string())),
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), ModelError> {
        let hashed_password = self.hash(password)?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, hashed_password, created)
            VALUES (?, ?, ?, ?)
            "#
        )
        .bind(name)
        .bind(email)
        .bind(&hashed_password)
        .bind(Utc::now())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation() && db_err.message().contains("email") =>
            {
                Err(ModelError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<i64, ModelError> {
        let row: Option<(i64, String)> = sqlx::query_as(
            r#"
            SELECT id, hashed_password
            FROM users
            WHERE email = ?
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let (id, hashed_password) = row.ok_or(ModelError::InvalidCredentials)?;

        if !verify(password, &hashed_password)? {
            return Err(ModelError::InvalidCredentials);
        }

        Ok(id)
    }

    async fn exists(&self, id: i64) -> Result<bool, ModelError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn get(&self, id: i64) -> Result<User, ModelError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, '' AS hashed_password, created
            FROM users
            WHERE id = ?
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(ModelError::NoRecord)
    }

    async fn update_password(
        &self,
        id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ModelError> {
        let hashed_password: Option<String> =
            sqlx::query_scalar("SELECT hashed_password FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let hashed_password = hashed_password.ok_or(ModelError::NoRecord)?;

        if !verify(old_password, &hashed_password)? {
            return Err(ModelError::InvalidCredentials);
        }

        let rehashed = self.hash(new_password)?;

        sqlx::query("UPDATE users SET hashed_password = ? WHERE id = ?")
            .bind(&rehashed)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
