//! Public landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::navigation::Route;
use crate::application::surfaces::{LandingOutcome, landing};
use crate::web::extract::CurrentSession;

/// Template for the public landing page.
///
/// Renders `templates/landing.html` with the product pitch and the
/// sign-in and register actions.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub sign_in_href: String,
    pub register_href: String,
}

impl Default for LandingTemplate {
    fn default() -> Self {
        Self {
            sign_in_href: Route::SignIn.path(),
            register_href: Route::Register.path(),
        }
    }
}

/// Renders the landing page, or redirects signed-in visitors to the dashboard.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler(CurrentSession(session): CurrentSession) -> Response {
    match landing::mount(&session) {
        LandingOutcome::Redirect(route) => Redirect::to(&route.path()).into_response(),
        LandingOutcome::Render => LandingTemplate::default().into_response(),
    }
}
