/**
 * Session State
 *
 * This module wraps the per-request `tower_sessions::Session` with the
 * operations handlers need: typed put/get, read-once values (flash and
 * return path) and token renewal.
 *
 * # Lifecycle
 *
 * The session layer loads the record for the cookie token before the
 * request reaches any handler and saves it after the response is built.
 * Only the token travels in the cookie; values live in the store.
 *
 * # Session Fixation
 *
 * [`SessionState::renew_token`] must be called on every change of
 * authentication state (login and logout). It issues a new token, keeps
 * the stored values and deletes the record under the old token.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{de::DeserializeOwned, Serialize};
use tower_sessions::Session;

use crate::backend::error::BackendError;

/// Session key holding the authenticated user's ID
pub const AUTHENTICATED_USER_ID: &str = "authenticated_user_id";

/// Session key holding the one-shot flash message
pub const FLASH: &str = "flash";

/// Session key holding the path to return to after login
pub const FROM_URI: &str = "from_uri";

/// Session key holding the anti-forgery token
pub const CSRF_TOKEN: &str = "csrf_token";

/// Request-scoped view of the session
#[derive(Clone, Debug)]
pub struct SessionState {
    session: Session,
}

impl SessionState {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Store a value under `key`
    pub async fn put<T>(&self, key: &str, value: T) -> Result<(), BackendError>
    where
        T: Serialize + Send + Sync,
    {
        self.session.insert(key, value).await?;
        Ok(())
    }

    /// Read a value without removing it
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, BackendError> {
        Ok(self.session.get(key).await?)
    }

    /// Read a string and remove it in the same step
    pub async fn pop_string(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.session.remove::<String>(key).await?)
    }

    /// Remove a value, whatever its type
    pub async fn remove(&self, key: &str) -> Result<(), BackendError> {
        self.session.remove_value(key).await?;
        Ok(())
    }

    /// Issue a new session token, carrying the stored values over
    pub async fn renew_token(&self) -> Result<(), BackendError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Authenticated user ID stored by the login handler
    pub async fn authenticated_user_id(&self) -> Result<Option<i64>, BackendError> {
        self.get(AUTHENTICATED_USER_ID).await
    }

    /// Queue a flash message for the next rendered page
    pub async fn flash(&self, message: &str) -> Result<(), BackendError> {
        self.put(FLASH, message).await
    }

    /// Underlying session handle
    pub fn inner(&self) -> &Session {
        &self.session
    }
}

impl<S> FromRequestParts<S> for SessionState
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| BackendError::internal(message))?;
        Ok(Self::new(session))
    }
}
