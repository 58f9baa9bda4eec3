//! Property-based tests for form validation
//!
//! Uses proptest to generate random inputs and verify the validation rules

#![cfg(feature = "ssr")]

use proptest::prelude::*;
use snipbox::backend::auth::handlers::UserSignupForm;
use snipbox::backend::snippets::types::{SnippetCreateForm, MAX_TITLE_CHARS};
use snipbox::shared::validator::{max_chars, min_chars, not_blank, EMAIL_RX};
use snipbox::shared::{Validator, PERMITTED_EXPIRY_DAYS};

proptest! {
    #[test]
    fn test_not_blank_agrees_with_trim(value in "\\PC*") {
        prop_assert_eq!(not_blank(&value), !value.trim().is_empty());
    }

    #[test]
    fn test_whitespace_is_blank(value in "[ \t\r\n]*") {
        prop_assert!(!not_blank(&value));
    }

    #[test]
    fn test_char_limits_count_characters(value in "\\PC{0,40}", n in 0usize..40) {
        let count = value.chars().count();
        prop_assert_eq!(max_chars(&value, n), count <= n);
        prop_assert_eq!(min_chars(&value, n), count >= n);
    }

    #[test]
    fn test_failed_check_invalidates(field in "[a-z_]{1,12}", message in "\\PC{1,30}") {
        let mut v = Validator::default();
        v.check_field(true, &field, message.clone());
        prop_assert!(v.valid());

        v.check_field(false, &field, message.clone());
        prop_assert!(!v.valid());
        prop_assert_eq!(v.field_error(&field), Some(message.as_str()));
    }

    #[test]
    fn test_snippet_expiry_outside_permitted_set_is_rejected(days in any::<i64>()) {
        let mut form = SnippetCreateForm {
            title: "O snail".to_string(),
            content: "Climb Mount Fuji".to_string(),
            expires: days.to_string(),
            ..Default::default()
        };

        prop_assert_eq!(form.expires_days(), Some(days));
        prop_assert_eq!(form.validate(days), PERMITTED_EXPIRY_DAYS.contains(&days));
    }

    #[test]
    fn test_snippet_title_length(title in "[a-zA-Z ]{0,150}") {
        let mut form = SnippetCreateForm {
            title: title.clone(),
            content: "body".to_string(),
            ..SnippetCreateForm::blank()
        };

        let expected = !title.trim().is_empty() && title.chars().count() <= MAX_TITLE_CHARS;
        prop_assert_eq!(form.validate(7), expected);
    }

    #[test]
    fn test_well_formed_emails_pass(
        local in "[a-z0-9.+_-]{1,20}",
        domain in "[a-z0-9]{1,20}",
        tld in "[a-z]{2,6}"
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(EMAIL_RX.is_match(&email));
    }

    #[test]
    fn test_signup_requires_at_sign(email in "[a-z0-9.]{1,30}") {
        let mut form = UserSignupForm {
            name: "Bob".to_string(),
            email,
            password: "validPa$$word".to_string(),
            ..Default::default()
        };

        prop_assert!(!form.validate());
        prop_assert!(!form.validator.field_errors("email").is_empty());
    }
}
