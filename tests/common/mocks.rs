//! In-memory store implementations for handler tests
//!
//! Fixtures:
//! - Snippet 1 exists ("An old silent pond"); every other ID is missing.
//!   Fetching snippet 13 panics.
//! - User 1 is Alice (`alice@example.com` / `pa$$word`).
//! - Signing up with `dupe@example.com` reports a duplicate email.
//! - [`StaleUserStore`] logs anyone in as user 99, which no longer exists.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use snipbox::backend::auth::users::UserStore;
use snipbox::backend::snippets::store::SnippetStore;
use snipbox::shared::{ModelError, Snippet, User};

pub const ALICE_EMAIL: &str = "alice@example.com";
pub const ALICE_PASSWORD: &str = "pa$$word";
pub const DUPE_EMAIL: &str = "dupe@example.com";
pub const PANIC_SNIPPET_ID: i64 = 13;

pub fn fixture_snippet() -> Snippet {
    Snippet {
        id: 1,
        title: "An old silent pond".to_string(),
        content: "An old silent pond...".to_string(),
        created: Utc.with_ymd_and_hms(2024, 3, 17, 10, 15, 0).unwrap(),
        expires: Utc.with_ymd_and_hms(2124, 3, 17, 10, 15, 0).unwrap(),
    }
}

/// Snippet store with one fixture snippet
#[derive(Default)]
pub struct MockSnippetStore {
    /// Fail every call with a database error
    pub failing: bool,
    next_id: AtomicI64,
    inserted: Mutex<Vec<(String, String, i64)>>,
}

impl MockSnippetStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Snippets passed to `insert`, as (title, content, expires_days)
    pub fn inserted(&self) -> Vec<(String, String, i64)> {
        self.inserted.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ModelError> {
        if self.failing {
            return Err(ModelError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl SnippetStore for MockSnippetStore {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_days: i64,
    ) -> Result<i64, ModelError> {
        self.check()?;
        self.inserted
            .lock()
            .unwrap()
            .push((title.to_string(), content.to_string(), expires_days));
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst) + 2)
    }

    async fn get(&self, id: i64) -> Result<Snippet, ModelError> {
        self.check()?;
        match id {
            1 => Ok(fixture_snippet()),
            PANIC_SNIPPET_ID => panic!("snippet {id} is cursed"),
            _ => Err(ModelError::NoRecord),
        }
    }

    async fn latest(&self) -> Result<Vec<Snippet>, ModelError> {
        self.check()?;
        Ok(vec![fixture_snippet()])
    }
}

/// Credential store with one fixture user
#[derive(Default)]
pub struct MockUserStore;

#[async_trait]
impl UserStore for MockUserStore {
    async fn insert(&self, _name: &str, email: &str, _password: &str) -> Result<(), ModelError> {
        match email {
            DUPE_EMAIL => Err(ModelError::DuplicateEmail),
            _ => Ok(()),
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<i64, ModelError> {
        if email == ALICE_EMAIL && password == ALICE_PASSWORD {
            return Ok(1);
        }
        Err(ModelError::InvalidCredentials)
    }

    async fn exists(&self, id: i64) -> Result<bool, ModelError> {
        Ok(id == 1)
    }

    async fn get(&self, id: i64) -> Result<User, ModelError> {
        match id {
            1 => Ok(User {
                id: 1,
                name: "Alice".to_string(),
                email: ALICE_EMAIL.to_string(),
                hashed_password: String::new(),
                created: Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap(),
            }),
            _ => Err(ModelError::NoRecord),
        }
    }

    async fn update_password(
        &self,
        id: i64,
        old_password: &str,
        _new_password: &str,
    ) -> Result<(), ModelError> {
        if id != 1 {
            return Err(ModelError::NoRecord);
        }
        if old_password != ALICE_PASSWORD {
            return Err(ModelError::InvalidCredentials);
        }
        Ok(())
    }
}

/// Credential store whose logins refer to a user that has since been deleted
#[derive(Default)]
pub struct StaleUserStore;

pub const STALE_USER_ID: i64 = 99;

#[async_trait]
impl UserStore for StaleUserStore {
    async fn insert(&self, _name: &str, _email: &str, _password: &str) -> Result<(), ModelError> {
        Ok(())
    }

    async fn authenticate(&self, _email: &str, _password: &str) -> Result<i64, ModelError> {
        Ok(STALE_USER_ID)
    }

    async fn exists(&self, _id: i64) -> Result<bool, ModelError> {
        Ok(false)
    }

    async fn get(&self, _id: i64) -> Result<User, ModelError> {
        Err(ModelError::NoRecord)
    }

    async fn update_password(
        &self,
        _id: i64,
        _old_password: &str,
        _new_password: &str,
    ) -> Result<(), ModelError> {
        Err(ModelError::NoRecord)
    }
}
