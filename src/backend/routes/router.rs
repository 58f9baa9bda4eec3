/**
 * Router Configuration
 *
 * This module assembles every route and the request pipeline into a
 * single Axum router.
 *
 * # Layering
 *
 * Dynamic pages (everything that renders a template or changes state) get
 * the session, CSRF and authentication stages. The liveness check and the
 * static assets skip them. The outer stages wrap every route and the
 * not-found fallback:
 *
 * ```text
 * CatchPanic → log_request → expose_errors → secure_headers → Timeout
 *   ├─ /ping, /static/{*path}
 *   └─ Session → csrf_protect → authenticate
 *        ├─ public pages
 *        └─ require_authentication → protected pages
 * ```
 */

use std::any::Any;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};

use crate::backend::auth::handlers::{
    account, login, login_page, logout, password_update, password_update_page, signup,
    signup_page,
};
use crate::backend::middleware::{
    authenticate, csrf_protect, expose_errors, log_request, recover_panic,
    require_authentication, secure_headers,
};
use crate::backend::routes::site_routes::{about, configure_site_routes, not_found};
use crate::backend::server::state::AppState;
use crate::backend::snippets::{home, snippet_create, snippet_create_post, snippet_view};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Create the Axum router with all routes and middleware configured
///
/// # Arguments
///
/// * `app_state` - Stores and configuration shared by all handlers
/// * `session_store` - Backing store for session data
///
/// # Route Details
///
/// ## Public
///
/// - `GET /` - Latest snippets
/// - `GET /snippet/view/{id}` - One snippet
/// - `GET /about` - About page
/// - `GET, POST /user/signup` - Registration
/// - `GET, POST /user/login` - Login
///
/// ## Authenticated
///
/// - `GET, POST /snippet/create` - Snippet creation
/// - `GET /user/account` - Account page
/// - `GET, POST /account/password/update` - Password change
/// - `POST /user/logout` - Logout
///
/// ## Session-less
///
/// - `GET /ping` - Liveness check
/// - `GET /static/{*path}` - Embedded assets
pub fn create_router<Store>(app_state: AppState, session_store: Store) -> Router<()>
where
    Store: SessionStore + Clone,
{
    let config = app_state.config.clone();
    let debug = config.debug;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE)
        .with_secure(config.secure_cookies)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            time::Duration::try_from(config.session_lifetime).unwrap_or(time::Duration::MAX),
        ));

    let protected = Router::new()
        .route("/snippet/create", get(snippet_create).post(snippet_create_post))
        .route("/user/account", get(account))
        .route(
            "/account/password/update",
            get(password_update_page).post(password_update),
        )
        .route("/user/logout", post(logout))
        .route_layer(middleware::from_fn(require_authentication));

    let dynamic = Router::new()
        .route("/", get(home))
        .route("/snippet/view/{id}", get(snippet_view))
        .route("/about", get(about))
        .route("/user/signup", get(signup_page).post(signup))
        .route("/user/login", get(login_page).post(login))
        .merge(protected)
        .layer(middleware::from_fn_with_state(app_state.clone(), authenticate))
        .layer(middleware::from_fn(csrf_protect))
        .layer(session_layer);

    let router = configure_site_routes(dynamic).fallback(not_found);
    let on_panic = move |payload: Box<dyn Any + Send + 'static>| recover_panic(payload, debug);

    router
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(on_panic))
                .layer(middleware::from_fn(log_request))
                .layer(middleware::from_fn_with_state(config.clone(), expose_errors))
                .layer(middleware::from_fn(secure_headers))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .with_state(app_state)
}
