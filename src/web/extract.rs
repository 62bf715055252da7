//! Request extractors for the session cookie and flash notices.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use crate::domain::entities::SessionContext;
use crate::state::AppState;
use crate::web::cookies::{FLASH_COOKIE, Notice, SESSION_COOKIE, read_cookie};

/// The caller's resolved [`SessionContext`].
///
/// Reads the `sb-access-token` cookie and asks the backend about it once per
/// request. Never rejects: a missing cookie is [`SessionContext::Anonymous`]
/// and a backend failure is [`SessionContext::Unavailable`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentSession(session): CurrentSession) -> impl IntoResponse {
///     // surfaces decide what to do with `session`
/// }
/// ```
pub struct CurrentSession(pub SessionContext);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = read_cookie(&parts.headers, SESSION_COOKIE);
        Ok(Self(state.session_service.resolve(token.as_deref()).await))
    }
}

/// The raw access token cookie, without asking the backend.
pub struct AccessToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for AccessToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(read_cookie(&parts.headers, SESSION_COOKIE)))
    }
}

/// A pending flash [`Notice`], if the previous response set one.
///
/// Handlers that render the notice must clear the flash cookie.
pub struct PendingNotice(pub Option<Notice>);

impl<S: Send + Sync> FromRequestParts<S> for PendingNotice {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            read_cookie(&parts.headers, FLASH_COOKIE).and_then(|v| Notice::parse(&v)),
        ))
    }
}
