/**
 * Snippet Handlers
 *
 * This module implements the snippet listing, detail and creation
 * endpoints.
 *
 * # Endpoints
 *
 * - `GET /` - Latest snippets
 * - `GET /snippet/view/{id}` - One snippet; `{id}` must be a positive integer
 * - `GET /snippet/create` - Creation form (authenticated)
 * - `POST /snippet/create` - Create a snippet (authenticated)
 */

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::snippets::types::SnippetCreateForm;
use crate::backend::views::{self, render, render_with_status, PageContext};
use crate::shared::ModelError;

/// Latest snippets handler
///
/// # Errors
///
/// Returns a server error if the store fails.
pub async fn home(
    State(app_state): State<AppState>,
    page: PageContext,
) -> Result<Response, BackendError> {
    let snippets = app_state.snippets.latest().await?;
    let data = page.template_data().await?;
    Ok(render(views::snippets::home(&data, &snippets)))
}

/// Single snippet handler
///
/// # Errors
///
/// * `ClientError(400)` - If `id` is not an integer of at least 1
/// * `NotFound` - If the snippet does not exist or has expired
pub async fn snippet_view(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    page: PageContext,
) -> Result<Response, BackendError> {
    let id = parse_id(&id).ok_or_else(BackendError::bad_request)?;

    let snippet = match app_state.snippets.get(id).await {
        Ok(snippet) => snippet,
        Err(ModelError::NoRecord) => return Err(BackendError::NotFound),
        Err(e) => return Err(e.into()),
    };

    let data = page.template_data().await?;
    Ok(render(views::snippets::view(&data, &snippet)))
}

/// Creation form handler
pub async fn snippet_create(page: PageContext) -> Result<Response, BackendError> {
    let data = page.template_data().await?;
    Ok(render(views::snippets::create(&data, &SnippetCreateForm::blank())))
}

/// Creation handler
///
/// # Errors
///
/// * `ClientError(400)` - If the body is not a form or `expires` is not an integer
pub async fn snippet_create_post(
    State(app_state): State<AppState>,
    page: PageContext,
    form: Result<Form<SnippetCreateForm>, FormRejection>,
) -> Result<Response, BackendError> {
    let Form(mut form) = form.map_err(|_| BackendError::bad_request())?;
    let expires_days = form.expires_days().ok_or_else(BackendError::bad_request)?;

    if !form.validate(expires_days) {
        let data = page.template_data().await?;
        return Ok(render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::snippets::create(&data, &form),
        ));
    }

    let id = app_state
        .snippets
        .insert(&form.title, &form.content, expires_days)
        .await?;

    tracing::info!(snippet_id = id, "snippet created");
    page.session().flash("Snippet successfully created!").await?;

    Ok(Redirect::to(&format!("/snippet/view/{id}")).into_response())
}

/// Parse a snippet ID from the path, accepting only integers of at least 1
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}
