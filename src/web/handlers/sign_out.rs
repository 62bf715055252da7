//! Sign-out handler.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};

use crate::application::navigation::Route;
use crate::application::services::SignOutOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::Notice;
use crate::web::extract::AccessToken;

/// Ends the caller's session.
///
/// # Endpoint
///
/// `POST /auth/sign-out`
///
/// # Behavior
///
/// - On success, clears the session cookie and redirects to sign-in with a
///   "signed out" notice.
/// - If the backend fails to end the session, the cookie is kept and the user
///   is sent back to the dashboard with a "sign-out failed" notice.
pub async fn sign_out_handler(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> Result<Response, AppError> {
    match state.session_service.sign_out(token.as_deref()).await {
        SignOutOutcome::SignedOut => {
            let headers = AppendHeaders([
                (SET_COOKIE, state.cookies.clear_session()?),
                (SET_COOKIE, state.cookies.flash(Notice::SignedOut)?),
            ]);
            Ok((headers, Redirect::to(&Route::SignIn.path())).into_response())
        }
        SignOutOutcome::Failed(_) => {
            let headers = AppendHeaders([(SET_COOKIE, state.cookies.flash(Notice::SignOutFailed)?)]);
            Ok((headers, Redirect::to(&Route::Dashboard.path())).into_response())
        }
    }
}
