//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};

use crate::application::navigation::Route;
use crate::application::presentation::{QuickAction, TicketRow};
use crate::application::surfaces::{DashboardOutcome, DashboardView};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::Notice;
use crate::web::extract::{CurrentSession, PendingNotice};
use crate::web::routes::SIGN_OUT_PATH;

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with:
/// - Greeting and role badge
/// - Quick-action tiles (admin panel only for agents and admins)
/// - The five most recent tickets, an empty message, or a load error
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub greeting: String,
    pub role_label: String,
    pub actions: Vec<QuickAction>,
    pub rows: Vec<TicketRow>,
    pub tickets_failed: bool,
    pub all_tickets_href: String,
    pub sign_out_action: &'static str,
    pub notice: Option<Notice>,
}

impl DashboardTemplate {
    pub fn new(view: &DashboardView, notice: Option<Notice>) -> Self {
        Self {
            greeting: view.greeting_name(),
            role_label: view
                .profile
                .data()
                .map(|p| p.role.as_str().to_string())
                .unwrap_or_default(),
            actions: view.quick_actions(),
            rows: view.ticket_rows(),
            tickets_failed: view.tickets.is_failed(),
            all_tickets_href: Route::TicketList.path(),
            sign_out_action: SIGN_OUT_PATH,
            notice,
        }
    }
}

/// Renders the dashboard, or redirects to sign-in without a session.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// # Errors
///
/// Returns [`AppError::Internal`] only if the flash-clearing cookie cannot be built.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    PendingNotice(notice): PendingNotice,
) -> Result<Response, AppError> {
    let view = match state.dashboard.mount(session).await {
        DashboardOutcome::Redirect(route) => return Ok(Redirect::to(&route.path()).into_response()),
        DashboardOutcome::Ready(view) => view,
    };

    let template = DashboardTemplate::new(&view, notice);

    if notice.is_some() {
        let clear = state.cookies.clear_flash()?;
        return Ok((AppendHeaders([(SET_COOKIE, clear)]), template).into_response());
    }

    Ok(template.into_response())
}
