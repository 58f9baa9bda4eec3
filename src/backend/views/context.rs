/**
 * Template Context
 *
 * Every page is rendered with a [`TemplateData`] assembled from the
 * request: the current year for the footer, the pending flash message,
 * whether the visitor is logged in and the CSRF token for embedded forms.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{DateTime, Datelike, Utc};

use crate::backend::auth::sessions::{SessionState, FLASH};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthenticatedUser, CsrfToken};

/// Format used for every timestamp shown to users
pub const HUMAN_DATE_FORMAT: &str = "%d %b %Y at %H:%M";

/// Per-request values available to every page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateData {
    pub current_year: i32,
    pub flash: Option<String>,
    pub is_authenticated: bool,
    pub csrf_token: String,
}

/// Extractor giving handlers access to the template context
///
/// The flash message is only consumed when [`PageContext::template_data`]
/// is called, so redirecting handlers leave it for the next page.
#[derive(Clone, Debug)]
pub struct PageContext {
    session: SessionState,
    is_authenticated: bool,
    csrf_token: String,
}

impl PageContext {
    /// Assemble the template context, consuming the flash message
    pub async fn template_data(&self) -> Result<TemplateData, BackendError> {
        Ok(TemplateData {
            current_year: Utc::now().year(),
            flash: self.session.pop_string(FLASH).await?,
            is_authenticated: self.is_authenticated,
            csrf_token: self.csrf_token.clone(),
        })
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = SessionState::from_request_parts(parts, state).await?;
        let is_authenticated = parts.extensions.get::<AuthenticatedUser>().is_some();
        let csrf_token = parts
            .extensions
            .get::<CsrfToken>()
            .map(|CsrfToken(token)| token.clone())
            .unwrap_or_default();

        Ok(Self {
            session,
            is_authenticated,
            csrf_token,
        })
    }
}

/// Render a timestamp in UTC for display
pub fn human_date(t: &DateTime<Utc>) -> String {
    t.format(HUMAN_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_human_date() {
        let t = Utc.with_ymd_and_hms(2024, 3, 17, 10, 15, 0).unwrap();
        assert_eq!(human_date(&t), "17 Mar 2024 at 10:15");
    }

    #[test]
    fn test_human_date_pads_day() {
        let t = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(human_date(&t), "02 Jan 2006 at 15:04");
    }
}
