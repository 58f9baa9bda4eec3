/**
 * Snippet Data Structure
 *
 * This module defines the Snippet record persisted by the snippet store
 * and rendered by the listing and detail pages.
 *
 * A snippet is immutable once stored. It stops being visible when its
 * `expires` timestamp passes; nothing deletes it explicitly.
 */
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifetimes, in days, a snippet may be created with
pub const PERMITTED_EXPIRY_DAYS: [i64; 3] = [1, 7, 365];

/// Lifetime pre-selected on the create form
pub const DEFAULT_EXPIRY_DAYS: i64 = 7;

/// A shared text snippet
///
/// # Fields
/// * `id` - Store-assigned identifier, monotonically increasing
/// * `title` - Short title (at most 100 characters)
/// * `content` - Snippet body
/// * `created` - Creation time (UTC)
/// * `expires` - `created` plus the chosen lifetime (UTC)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Snippet {
    /// Unique snippet ID
    pub id: i64,
    /// Snippet title
    pub title: String,
    /// Snippet body
    pub content: String,
    /// Created at timestamp
    pub created: DateTime<Utc>,
    /// Expiry timestamp
    pub expires: DateTime<Utc>,
}

/// Check that `days` is one of [`PERMITTED_EXPIRY_DAYS`]
pub fn is_permitted_expiry(days: i64) -> bool {
    PERMITTED_EXPIRY_DAYS.contains(&days)
}

/// Compute the expiry timestamp for a snippet created at `created`
pub fn expiry_from(created: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    created + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permitted_expiry() {
        assert!(is_permitted_expiry(1));
        assert!(is_permitted_expiry(7));
        assert!(is_permitted_expiry(365));
        assert!(!is_permitted_expiry(0));
        assert!(!is_permitted_expiry(356));
        assert!(!is_permitted_expiry(-7));
    }

    #[test]
    fn test_expiry_from_adds_whole_days() {
        let created = Utc::now();
        let expires = expiry_from(created, 7);
        assert_eq!(expires - created, Duration::days(7));
    }
}
