/**
 * Account Handlers
 *
 * This module implements the account page and the password update flow.
 * Both sit behind the authentication gate.
 *
 * # Endpoints
 *
 * - `GET /user/account` - Name, email and join date
 * - `GET /account/password/update` - Password update form
 * - `POST /account/password/update` - Verify the current password and
 *   store the new one
 */

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::backend::auth::handlers::types::PasswordUpdateForm;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::views::{self, render, render_with_status, PageContext};
use crate::shared::ModelError;

/// Account page handler
///
/// A user deleted since the session was resolved is sent back to login.
pub async fn account(
    State(app_state): State<AppState>,
    AuthUser(user): AuthUser,
    page: PageContext,
) -> Result<Response, BackendError> {
    let user = match app_state.users.get(user.user_id).await {
        Ok(user) => user,
        Err(ModelError::NoRecord) => return Ok(Redirect::to("/user/login").into_response()),
        Err(e) => return Err(e.into()),
    };

    let data = page.template_data().await?;
    Ok(render(views::auth::account(&data, &user)))
}

/// Password update form handler
pub async fn password_update_page(page: PageContext) -> Result<Response, BackendError> {
    let data = page.template_data().await?;
    Ok(render(views::auth::password_update(
        &data,
        &PasswordUpdateForm::default(),
    )))
}

/// Password update handler
///
/// # Errors
///
/// * `ClientError(400)` - If the body is not a form
/// * Server error - If hashing or the store fails
pub async fn password_update(
    State(app_state): State<AppState>,
    AuthUser(user): AuthUser,
    page: PageContext,
    form: Result<Form<PasswordUpdateForm>, FormRejection>,
) -> Result<Response, BackendError> {
    let Form(mut form) = form.map_err(|_| BackendError::bad_request())?;

    if form.validate() {
        match app_state
            .users
            .update_password(user.user_id, &form.current_password, &form.new_password)
            .await
        {
            Ok(()) => {
                tracing::info!(user_id = user.user_id, "password updated");
                page.session().flash("Your password has been updated!").await?;
                return Ok(Redirect::to("/user/account").into_response());
            }
            Err(ModelError::InvalidCredentials) => {
                form.validator
                    .add_field_error("current_password", "Current password is incorrect");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let data = page.template_data().await?;
    Ok(render_with_status(
        StatusCode::UNPROCESSABLE_ENTITY,
        views::auth::password_update(&data, &form),
    ))
}
