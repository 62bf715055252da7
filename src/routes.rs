//! Top-level router configuration combining portal pages and JSON endpoints.
//!
//! # Route Structure
//!
//! - `GET  /`              - Landing page (public)
//! - `GET  /dashboard`     - Dashboard (session cookie required, else redirect)
//! - `GET  /auth/sign-in`  - Sign-in form
//! - `POST /auth/sign-in`  - Credential submission (rate limited)
//! - `POST /auth/sign-out` - End the session
//! - `GET  /health`        - Backend reachability (JSON)
//! - `/static/*`           - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on credential submission
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn router(state: AppState, behind_proxy: bool) -> Router {
    let sign_in_submit = if behind_proxy {
        web::routes::sign_in_submit().layer(rate_limit::layer(SmartIpKeyExtractor))
    } else {
        web::routes::sign_in_submit().layer(rate_limit::layer(PeerIpKeyExtractor))
    };

    Router::new()
        .merge(web::routes::page_routes())
        .route(web::routes::SIGN_IN_PATH, sign_in_submit)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// See [`router`] for the arguments.
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, behind_proxy))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found("Page not found", json!({ "path": uri.path() }))
}
