//! Sign-in page and form submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::application::navigation::Route;
use crate::application::services::SignInOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::Notice;
use crate::web::extract::{CurrentSession, PendingNotice};

const INVALID_CREDENTIALS: &str = "Invalid email or password.";
const SIGN_IN_UNAVAILABLE: &str = "Sign-in is temporarily unavailable. Please try again.";

/// Submitted sign-in form.
#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "Enter your password."))]
    pub password: String,
}

/// Template for the sign-in page.
///
/// Renders `templates/sign_in.html` with the credentials form, the last
/// submitted email, and an inline error or flash notice.
#[derive(Template, WebTemplate)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
    pub action: String,
    pub register_href: String,
    pub email: String,
    pub error: Option<String>,
    pub notice: Option<Notice>,
}

impl SignInTemplate {
    fn new(email: impl Into<String>, error: Option<&str>, notice: Option<Notice>) -> Self {
        Self {
            action: Route::SignIn.path(),
            register_href: Route::Register.path(),
            email: email.into(),
            error: error.map(str::to_string),
            notice,
        }
    }
}

/// Renders the sign-in page.
///
/// # Endpoint
///
/// `GET /auth/sign-in`
///
/// Visitors with an active session are sent to the dashboard. A pending flash
/// notice (for example "signed out") is shown once and its cookie cleared.
pub async fn sign_in_page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    PendingNotice(notice): PendingNotice,
) -> Result<Response, AppError> {
    if session.is_active() {
        return Ok(Redirect::to(&Route::Dashboard.path()).into_response());
    }

    let template = SignInTemplate::new("", None, notice);

    if notice.is_some() {
        let clear = state.cookies.clear_flash()?;
        return Ok((AppendHeaders([(SET_COOKIE, clear)]), template).into_response());
    }

    Ok(template.into_response())
}

/// Handles sign-in form submission.
///
/// # Endpoint
///
/// `POST /auth/sign-in` (form-encoded `email`, `password`)
///
/// # Responses
///
/// - **303 See Other** to `/dashboard` with the session cookie on success
/// - **422 Unprocessable Entity** with the form if validation fails
/// - **401 Unauthorized** with the form if the backend rejects the credentials
/// - **503 Service Unavailable** with the form if the backend cannot be reached
pub async fn sign_in_handler(
    State(state): State<AppState>,
    Form(form): Form<SignInForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        let message = first_error_message(&errors);
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            SignInTemplate::new(form.email, Some(&message), None),
        )
            .into_response());
    }

    match state.session_service.sign_in(&form.email, &form.password).await {
        SignInOutcome::SignedIn(session) => {
            let headers = AppendHeaders([
                (SET_COOKIE, state.cookies.session(&session.access_token)?),
                (SET_COOKIE, state.cookies.flash(Notice::SignedIn)?),
            ]);
            Ok((headers, Redirect::to(&Route::Dashboard.path())).into_response())
        }
        SignInOutcome::Rejected => Ok((
            StatusCode::UNAUTHORIZED,
            SignInTemplate::new(form.email, Some(INVALID_CREDENTIALS), None),
        )
            .into_response()),
        SignInOutcome::Unavailable(_) => Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            SignInTemplate::new(form.email, Some(SIGN_IN_UNAVAILABLE), None),
        )
            .into_response()),
    }
}

/// Picks the message of the first failing field, email before password.
fn first_error_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    ["email", "password"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Check the form and try again.".to_string())
}
