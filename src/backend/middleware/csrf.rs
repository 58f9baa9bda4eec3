/**
 * CSRF Protection
 *
 * Each session carries a random anti-forgery token under `csrf_token`,
 * created the first time the session passes through this stage. Every
 * rendered form embeds it as a hidden `csrf_token` field.
 *
 * For POST, PUT, PATCH and DELETE the submitted token must equal the
 * session's token. It is read from the `X-CSRF-Token` header when present,
 * otherwise from the url-encoded form body, which is buffered and handed
 * on to the handler unchanged. Mismatches are rejected with 400 before any
 * handler runs.
 */

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Request},
    http::{header, Method},
    middleware::Next,
    response::Response,
    Form,
};
use serde::Deserialize;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::backend::auth::sessions::{SessionState, CSRF_TOKEN};
use crate::backend::error::BackendError;

/// Header accepted in place of the form field
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Largest form body buffered for the token check
const MAX_FORM_BYTES: usize = 1024 * 1024;

/// The session's anti-forgery token, exposed to templates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrfToken(pub String);

#[derive(Deserialize)]
struct CsrfForm {
    #[serde(default)]
    csrf_token: String,
}

/// CSRF protection stage
///
/// # Errors
///
/// * `ClientError(400)` - If a state-changing request carries no token or a
///   token that does not match the session
pub async fn csrf_protect(
    session: SessionState,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = match session.get::<String>(CSRF_TOKEN).await? {
        Some(token) => token,
        None => {
            let token = generate_token();
            session.put(CSRF_TOKEN, &token).await?;
            token
        }
    };

    let mut request = if requires_check(request.method()) {
        let (submitted, request) = submitted_token(request).await?;
        if !tokens_match(submitted.as_deref(), &token) {
            tracing::warn!(
                method = %request.method(),
                uri = %request.uri(),
                "rejected request with missing or invalid CSRF token"
            );
            return Err(BackendError::bad_request());
        }
        request
    } else {
        request
    };

    request.extensions_mut().insert(CsrfToken(token));
    Ok(next.run(request).await)
}

fn generate_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

fn requires_check(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH | Method::DELETE)
}

fn tokens_match(submitted: Option<&str>, expected: &str) -> bool {
    match submitted {
        Some(submitted) if !submitted.is_empty() => {
            submitted.as_bytes().ct_eq(expected.as_bytes()).into()
        }
        _ => false,
    }
}

/// Pull the submitted token out of the header or the form body
///
/// Returns the request rebuilt around the buffered body so the handler
/// can still extract its form.
async fn submitted_token(request: Request) -> Result<(Option<String>, Request), BackendError> {
    if let Some(value) = request.headers().get(CSRF_HEADER) {
        let token = value.to_str().ok().map(str::to_owned);
        return Ok((token, request));
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|_| BackendError::bad_request())?;

    let mut probe = Request::builder().method(Method::POST);
    if let Some(content_type) = parts.headers.get(header::CONTENT_TYPE) {
        probe = probe.header(header::CONTENT_TYPE, content_type);
    }
    let probe = probe
        .body(Body::from(bytes.clone()))
        .map_err(|e| BackendError::internal(e.to_string()))?;

    let token = match Form::<CsrfForm>::from_request(probe, &()).await {
        Ok(Form(form)) => Some(form.csrf_token),
        Err(_) => None,
    };

    Ok((token, Request::from_parts(parts, Body::from(bytes))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_check() {
        assert!(requires_check(&Method::POST));
        assert!(requires_check(&Method::DELETE));
        assert!(!requires_check(&Method::GET));
        assert!(!requires_check(&Method::HEAD));
    }

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match(Some("abc"), "abc"));
        assert!(!tokens_match(Some("abd"), "abc"));
        assert!(!tokens_match(Some("ab"), "abc"));
        assert!(!tokens_match(Some(""), ""));
        assert!(!tokens_match(None, "abc"));
    }

    #[test]
    fn test_generated_tokens_are_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_token_from_form_body_keeps_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/snippet/create")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("title=O+snail&csrf_token=tok123"))
            .unwrap();

        let (token, request) = submitted_token(request).await.unwrap();
        assert_eq!(token.as_deref(), Some("tok123"));
        assert_eq!(request.uri().path(), "/snippet/create");
        let body = to_bytes(request.into_body(), MAX_FORM_BYTES).await.unwrap();
        assert_eq!(&body[..], b"title=O+snail&csrf_token=tok123");
    }

    #[tokio::test]
    async fn test_token_from_header() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/user/logout")
            .header(CSRF_HEADER, "from-header")
            .body(Body::empty())
            .unwrap();

        let (token, _) = submitted_token(request).await.unwrap();
        assert_eq!(token.as_deref(), Some("from-header"));
    }

    #[tokio::test]
    async fn test_non_form_body_has_no_token() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/user/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"csrf_token":"x"}"#))
            .unwrap();

        let (token, _) = submitted_token(request).await.unwrap();
        assert_eq!(token, None);
    }
}
