/**
 * Snippet Handler Types
 *
 * The snippet creation form keeps `expires` as submitted so the handler
 * can tell a malformed value (400) apart from a well-formed value outside
 * the permitted set (422).
 */

use serde::Deserialize;

use crate::shared::validator::{max_chars, not_blank, permitted_value};
use crate::shared::{Validator, DEFAULT_EXPIRY_DAYS, PERMITTED_EXPIRY_DAYS};

/// Longest accepted snippet title, in characters
pub const MAX_TITLE_CHARS: usize = 100;

/// Snippet creation form
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SnippetCreateForm {
    pub title: String,
    pub content: String,
    pub expires: String,
    #[serde(skip)]
    pub validator: Validator,
}

impl SnippetCreateForm {
    /// Blank form with the default expiry selected
    pub fn blank() -> Self {
        Self {
            expires: DEFAULT_EXPIRY_DAYS.to_string(),
            ..Default::default()
        }
    }

    /// Parse the submitted expiry, `None` if it is not an integer
    pub fn expires_days(&self) -> Option<i64> {
        self.expires.trim().parse().ok()
    }

    /// Run every snippet rule against the parsed expiry
    pub fn validate(&mut self, expires_days: i64) -> bool {
        let v = &mut self.validator;
        v.check_field(not_blank(&self.title), "title", "This field cannot be blank");
        v.check_field(
            max_chars(&self.title, MAX_TITLE_CHARS),
            "title",
            format!("This field cannot be more than {MAX_TITLE_CHARS} characters long"),
        );
        v.check_field(not_blank(&self.content), "content", "This field cannot be blank");
        v.check_field(
            permitted_value(&expires_days, &PERMITTED_EXPIRY_DAYS),
            "expires",
            "This field must equal 1, 7 or 365",
        );
        v.valid()
    }

    /// Whether `days` is the selected expiry option
    pub fn is_selected(&self, days: i64) -> bool {
        self.expires_days() == Some(days)
    }
}
