/**
 * Logout Handler
 *
 * `POST /user/logout` renews the session token, forgets the user ID and
 * redirects home with a flash message.
 */

use axum::response::{IntoResponse, Redirect, Response};

use crate::backend::auth::sessions::{SessionState, AUTHENTICATED_USER_ID};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Logout handler
pub async fn logout(
    AuthUser(user): AuthUser,
    session: SessionState,
) -> Result<Response, BackendError> {
    session.renew_token().await?;
    session.remove(AUTHENTICATED_USER_ID).await?;
    session.flash("You've been logged out successfully!").await?;

    tracing::info!(user_id = user.user_id, "user logged out");

    Ok(Redirect::to("/").into_response())
}
