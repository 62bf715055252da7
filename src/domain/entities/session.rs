//! Authenticated session and the per-request session context.

/// Backend-issued proof of authentication for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub access_token: String,
}

/// Outcome of resolving the caller's session at the start of a request.
///
/// Surfaces receive this value instead of looking the session up themselves,
/// so a lookup failure stays distinguishable from an anonymous visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionContext {
    /// The backend confirmed the access token.
    Active(Session),
    /// No token was presented, or the backend rejected it.
    Anonymous,
    /// The backend could not answer; carries the failure description.
    Unavailable(String),
}

impl SessionContext {
    /// Returns the session when one is active.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}
