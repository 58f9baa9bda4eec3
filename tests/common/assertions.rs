//! Custom assertion macros and utilities
//!
//! Provides assertion macros with more descriptive failure messages for
//! rendered pages and redirects.

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a string does not contain a substring
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            !$haystack.contains($needle),
            "Expected '{}' not to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a response is a 303 redirect to `location`
#[macro_export]
macro_rules! assert_redirect {
    ($response:expr, $location:expr) => {
        assert_eq!(
            $response.status_code(),
            axum::http::StatusCode::SEE_OTHER,
            "Expected a redirect, got: {}",
            $response.text()
        );
        assert_eq!($crate::common::location(&$response), $location);
    };
}
