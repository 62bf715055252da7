//! Public landing surface.

use crate::application::navigation::Route;
use crate::domain::entities::SessionContext;

/// What the landing page does for a given visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingOutcome {
    Redirect(Route),
    /// Render the marketing content with sign-in and register actions.
    Render,
}

/// Signed-in visitors go straight to the dashboard; everyone else, including
/// visitors whose session could not be checked, sees the public page.
pub fn mount(session: &SessionContext) -> LandingOutcome {
    match session {
        SessionContext::Active(_) => LandingOutcome::Redirect(Route::Dashboard),
        SessionContext::Anonymous | SessionContext::Unavailable(_) => LandingOutcome::Render,
    }
}
