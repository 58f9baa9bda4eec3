/**
 * Signup Handler
 *
 * This module implements user registration at `/user/signup`.
 *
 * # Registration Process
 *
 * 1. Validate name, email format and password length
 * 2. Insert the user (the store hashes the password)
 * 3. Queue a flash message and redirect to the login page
 *
 * # Validation
 *
 * - Name must not be blank
 * - Email must not be blank and must look like an address
 * - Password must be at least 8 characters long
 * - Email must be unique; a duplicate is reported on the email field
 *
 * Failed validation re-renders the form with 422 and the submitted name and
 * email; the password is never echoed back.
 */

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::backend::auth::handlers::types::UserSignupForm;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::views::{self, render, render_with_status, PageContext};
use crate::shared::ModelError;

/// Signup form handler
pub async fn signup_page(page: PageContext) -> Result<Response, BackendError> {
    let data = page.template_data().await?;
    Ok(render(views::auth::signup(&data, &UserSignupForm::default())))
}

/// Sign up handler
///
/// # Errors
///
/// * `ClientError(400)` - If the body is not a form
/// * Server error - If hashing or the store fails
pub async fn signup(
    State(app_state): State<AppState>,
    page: PageContext,
    form: Result<Form<UserSignupForm>, FormRejection>,
) -> Result<Response, BackendError> {
    let Form(mut form) = form.map_err(|_| BackendError::bad_request())?;

    if form.validate() {
        match app_state.users.insert(&form.name, &form.email, &form.password).await {
            Ok(()) => {
                tracing::info!(email = %form.email, "user signed up");
                page.session()
                    .flash("Your signup was successful. Please log in.")
                    .await?;
                return Ok(Redirect::to("/user/login").into_response());
            }
            Err(ModelError::DuplicateEmail) => {
                tracing::info!(email = %form.email, "signup with registered email");
                form.validator
                    .add_field_error("email", "Email address is already in use");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let data = page.template_data().await?;
    Ok(render_with_status(
        StatusCode::UNPROCESSABLE_ENTITY,
        views::auth::signup(&data, &form),
    ))
}
