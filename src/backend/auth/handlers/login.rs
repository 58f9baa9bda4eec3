/**
 * Login Handler
 *
 * This module implements user authentication at `/user/login`.
 *
 * # Authentication Process
 *
 * 1. Validate email format and that a password was given
 * 2. Verify the credentials against the store
 * 3. Renew the session token and store the user ID
 * 4. Redirect to the remembered `from_uri`, or to the snippet form
 *
 * # Security
 *
 * - Unknown emails and wrong passwords produce the same message
 * - The session token is renewed before the user ID is stored
 */

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::backend::auth::handlers::types::UserLoginForm;
use crate::backend::auth::sessions::{AUTHENTICATED_USER_ID, FROM_URI};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::views::{self, render, render_with_status, PageContext};
use crate::shared::ModelError;

/// Where a fresh login lands when no page was remembered
pub const DEFAULT_LOGIN_REDIRECT: &str = "/snippet/create";

/// Login form handler
pub async fn login_page(page: PageContext) -> Result<Response, BackendError> {
    let data = page.template_data().await?;
    Ok(render(views::auth::login(&data, &UserLoginForm::default())))
}

/// Login handler
///
/// # Errors
///
/// * `ClientError(400)` - If the body is not a form
/// * Server error - If the store or session fails
pub async fn login(
    State(app_state): State<AppState>,
    page: PageContext,
    form: Result<Form<UserLoginForm>, FormRejection>,
) -> Result<Response, BackendError> {
    let Form(mut form) = form.map_err(|_| BackendError::bad_request())?;

    if form.validate() {
        match app_state.users.authenticate(&form.email, &form.password).await {
            Ok(user_id) => {
                let session = page.session();
                session.renew_token().await?;
                session.put(AUTHENTICATED_USER_ID, user_id).await?;
                tracing::info!(user_id, "user logged in");

                let target = session
                    .pop_string(FROM_URI)
                    .await?
                    .unwrap_or_else(|| DEFAULT_LOGIN_REDIRECT.to_string());
                return Ok(Redirect::to(&target).into_response());
            }
            Err(ModelError::InvalidCredentials) => {
                tracing::warn!("failed login attempt");
                form.validator
                    .add_non_field_error("Email or password is incorrect");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let data = page.template_data().await?;
    Ok(render_with_status(
        StatusCode::UNPROCESSABLE_ENTITY,
        views::auth::login(&data, &form),
    ))
}
