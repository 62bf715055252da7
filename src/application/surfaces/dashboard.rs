//! Authenticated dashboard surface.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::navigation::Route;
use crate::application::presentation::{
    QuickAction, RECENT_TICKETS_LIMIT, TicketRow, quick_actions, shows_admin_tile,
};
use crate::domain::backend::Backend;
use crate::domain::entities::{Profile, Session, SessionContext, Ticket};
use crate::domain::fetched::Fetched;

/// Data resolved for a signed-in dashboard visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub session: Session,
    pub profile: Fetched<Profile>,
    pub tickets: Fetched<Vec<Ticket>>,
}

impl DashboardView {
    fn profile(&self) -> Option<&Profile> {
        self.profile.data()
    }

    pub fn shows_admin_tile(&self) -> bool {
        shows_admin_tile(self.profile())
    }

    pub fn quick_actions(&self) -> Vec<QuickAction> {
        quick_actions(self.profile())
    }

    /// Name to greet the user with, falling back to the session email.
    pub fn greeting_name(&self) -> String {
        self.profile()
            .map(Profile::display_name)
            .filter(|name| !name.is_empty())
            .or(self.session.email.as_deref())
            .unwrap_or_default()
            .to_string()
    }

    /// Rows for the recent tickets list; empty unless tickets were fetched.
    pub fn ticket_rows(&self) -> Vec<TicketRow> {
        self.tickets
            .data()
            .map(|tickets| tickets.iter().map(TicketRow::from_ticket).collect())
            .unwrap_or_default()
    }
}

/// What the dashboard does for a given visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOutcome {
    Redirect(Route),
    Ready(DashboardView),
}

/// Dashboard surface with an injected backend.
pub struct DashboardSurface {
    backend: Arc<dyn Backend>,
}

impl DashboardSurface {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Resolves everything the dashboard needs for this visit.
    ///
    /// Without an active session the visitor is sent to sign-in and no data is
    /// fetched. Otherwise the profile and the recent tickets are fetched
    /// concurrently; either failing leaves the other intact.
    pub async fn mount(&self, session: SessionContext) -> DashboardOutcome {
        let session = match session {
            SessionContext::Active(session) => session,
            SessionContext::Anonymous => {
                debug!("Dashboard requested without a session");
                return DashboardOutcome::Redirect(Route::SignIn);
            }
            SessionContext::Unavailable(reason) => {
                warn!("Redirecting to sign-in, session could not be verified: {}", reason);
                return DashboardOutcome::Redirect(Route::SignIn);
            }
        };

        let (profile, tickets) = tokio::join!(
            self.backend.get_profile(&session),
            self.backend
                .list_recent_tickets(&session, RECENT_TICKETS_LIMIT),
        );

        let profile = Fetched::from_optional(profile);
        if let Fetched::Failed(reason) = &profile {
            warn!(user_id = %session.user_id, "Profile fetch failed: {}", reason);
        }

        let tickets = Fetched::from_list(tickets.map(|mut tickets| {
            tickets.truncate(RECENT_TICKETS_LIMIT);
            tickets
        }));
        if let Fetched::Failed(reason) = &tickets {
            warn!(user_id = %session.user_id, "Recent tickets fetch failed: {}", reason);
        }

        DashboardOutcome::Ready(DashboardView {
            session,
            profile,
            tickets,
        })
    }
}
