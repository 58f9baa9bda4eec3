//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Application fixtures backed by mock or in-memory SQLite stores
//! - Session and CSRF helpers for driving form flows
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod mocks;

use std::sync::{Arc, LazyLock};

use axum::Router;
use axum_test::{TestResponse, TestServer, TestServerConfig};
use regex::Regex;
use tower_sessions::MemoryStore;

use snipbox::backend::auth::users::SqliteUserStore;
use snipbox::backend::routes::create_router;
use snipbox::backend::server::config::connect_in_memory;
use snipbox::backend::server::state::{AppState, SnippetStoreRef, UserStoreRef};
use snipbox::backend::snippets::store::SqliteSnippetStore;
use snipbox::shared::AppConfig;

pub use mocks::{
    MockSnippetStore, MockUserStore, StaleUserStore, ALICE_EMAIL, ALICE_PASSWORD, DUPE_EMAIL,
};

static CSRF_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name="csrf_token" value="([^"]+)""#).unwrap());

/// Configuration used by tests: plain-HTTP cookies, generic errors
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .secure_cookies(false)
        .build()
        .unwrap()
}

/// Router over the given stores with an in-memory session store
pub fn app_with(snippets: SnippetStoreRef, users: UserStoreRef, config: AppConfig) -> Router {
    let state = AppState::new(snippets, users, config);
    create_router(state, MemoryStore::default())
}

/// Router over the mock stores
pub fn mock_app() -> Router {
    app_with(
        Arc::new(MockSnippetStore::default()),
        Arc::new(MockUserStore),
        test_config(),
    )
}

/// Router over SQLite stores on a private in-memory database
pub async fn sqlite_app() -> Router {
    let pool = connect_in_memory().await.expect("in-memory database");
    app_with(
        Arc::new(SqliteSnippetStore::new(pool.clone())),
        Arc::new(SqliteUserStore::new(pool).with_cost(4)),
        test_config(),
    )
}

/// Test server that keeps cookies between requests, like a browser
pub fn browser(app: Router) -> TestServer {
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, config).unwrap()
}

/// Extract the CSRF token embedded in a rendered page
pub fn extract_csrf_token(html: &str) -> String {
    CSRF_RX
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should embed a CSRF token")
}

/// Load `path` and return the CSRF token of the form it renders
pub async fn csrf_token(server: &TestServer, path: &str) -> String {
    let response = server.get(path).await;
    extract_csrf_token(&response.text())
}

/// Log in through the login form
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    let token = csrf_token(server, "/user/login").await;
    server
        .post("/user/login")
        .form(&[("email", email), ("password", password), ("csrf_token", token.as_str())])
        .await
}

/// Value of the session cookie set by `response`, if any
pub fn session_cookie(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|cookie| cookie.starts_with("session="))
        .map(str::to_string)
}

/// Location header of a redirect response
pub fn location(response: &TestResponse) -> String {
    response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
