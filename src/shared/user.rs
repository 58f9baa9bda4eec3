/**
 * User Data Structure
 *
 * This module defines the User record persisted by the credential store.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// User email address (unique, compared as stored)
    pub email: String,
    /// Hashed password (bcrypt), never serialized
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    /// Created at timestamp
    pub created: DateTime<Utc>,
}
