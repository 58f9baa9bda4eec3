/**
 * Authentication Middleware
 *
 * This module resolves the authentication state of each request from the
 * session and gates the routes that require a logged-in user.
 *
 * # Stages
 *
 * - [`authenticate`] runs on every dynamic route. It reads the user ID
 *   stored at login, confirms the user still exists and attaches an
 *   [`AuthenticatedUser`] to the request extensions. A stale ID is removed
 *   from the session and the request continues anonymously.
 * - [`require_authentication`] is a route layer on the protected routes.
 *   Anonymous requests are redirected to the login page. For GET requests
 *   the requested path is first remembered as `from_uri`.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::backend::auth::sessions::{SessionState, AUTHENTICATED_USER_ID, FROM_URI};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user resolved from the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Authentication resolution stage
///
/// # Errors
///
/// Returns a server error if the session or credential store fails.
pub async fn authenticate(
    State(app_state): State<AppState>,
    session: SessionState,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    if let Some(user_id) = session.authenticated_user_id().await? {
        if app_state.users.exists(user_id).await? {
            request.extensions_mut().insert(AuthenticatedUser { user_id });
        } else {
            tracing::warn!(user_id, "session refers to a missing user, clearing it");
            session.remove(AUTHENTICATED_USER_ID).await?;
        }
    }

    Ok(next.run(request).await)
}

/// Authentication gate for protected routes
///
/// Authenticated responses are marked `Cache-Control: no-store` so that
/// pages behind the gate are not kept in shared caches.
pub async fn require_authentication(
    session: SessionState,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    if request.extensions().get::<AuthenticatedUser>().is_none() {
        // Only a GET target can be followed back after login
        if request.method() == Method::GET {
            session.put(FROM_URI, request.uri().path()).await?;
        }
        return Ok(Redirect::to("/user/login").into_response());
    }

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    Ok(response)
}

/// Axum extractor for the authenticated user
///
/// Only valid behind [`require_authentication`]; elsewhere a missing user
/// is rejected with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn test_extract_authenticated_user() {
        let request = HttpRequest::builder().uri("/user/account").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(AuthenticatedUser { user_id: 3 });

        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.user_id, 3);
    }

    #[tokio::test]
    async fn test_extract_authenticated_user_missing() {
        let request = HttpRequest::builder().uri("/user/account").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let rejection = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(rejection, StatusCode::UNAUTHORIZED);
    }
}
