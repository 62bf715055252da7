//! Portal route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    dashboard_handler, landing_handler, sign_in_handler, sign_in_page, sign_out_handler,
};
use axum::{
    Router,
    routing::{MethodRouter, get, post},
};

/// Form action of the sign-in form.
pub const SIGN_IN_PATH: &str = "/auth/sign-in";

/// Form action of the sign-out button.
pub const SIGN_OUT_PATH: &str = "/auth/sign-out";

/// Page routes that resolve the caller's session themselves.
///
/// # Endpoints
///
/// - `GET  /`              - Landing page (redirects signed-in visitors)
/// - `GET  /dashboard`     - Dashboard (redirects anonymous visitors)
/// - `GET  /auth/sign-in`  - Sign-in form
/// - `POST /auth/sign-out` - End the session
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/dashboard", get(dashboard_handler))
        .route(SIGN_IN_PATH, get(sign_in_page))
        .route(SIGN_OUT_PATH, post(sign_out_handler))
}

/// `POST /auth/sign-in`, left unlayered so the caller can attach a rate limiter.
pub fn sign_in_submit() -> MethodRouter<AppState> {
    post(sign_in_handler)
}
