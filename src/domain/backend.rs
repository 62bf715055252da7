//! Boundary trait for the hosted helpdesk backend.
//!
//! The backend owns identity, profiles and tickets. Everything this crate knows
//! about them comes through [`Backend`]; implementations live in
//! [`crate::infrastructure`].

use async_trait::async_trait;

use crate::domain::entities::{Profile, Session, Ticket};

/// Errors raised while talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response (DNS, TLS, timeout, refused).
    #[error("backend unreachable: {0}")]
    Transport(String),

    /// The backend answered with a status the caller did not expect.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("unexpected backend payload: {0}")]
    Decode(String),

    /// The client could not be built from its configuration.
    #[error("backend misconfigured: {0}")]
    Config(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Operations consumed from the backend.
///
/// Row-level reads take the caller's [`Session`] because the backend scopes
/// profile and ticket visibility to the bearer of its access token.
///
/// # Implementations
///
/// - [`crate::infrastructure::supabase::SupabaseBackend`] - hosted GoTrue/PostgREST
/// - [`crate::infrastructure::memory::InMemoryBackend`] - seeded fake for tests and demos
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// Resolves an access token to its session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(session))` if the token is valid
    /// - `Ok(None)` if the backend rejects the token
    async fn get_current_session(&self, access_token: &str) -> BackendResult<Option<Session>>;

    /// Fetches the profile row owned by the session's user.
    ///
    /// Returns `Ok(None)` when the user has no profile row.
    async fn get_profile(&self, session: &Session) -> BackendResult<Option<Profile>>;

    /// Fetches at most `limit` tickets, newest first, with category names.
    async fn list_recent_tickets(
        &self,
        session: &Session,
        limit: usize,
    ) -> BackendResult<Vec<Ticket>>;

    /// Terminates the session identified by `access_token`.
    async fn end_session(&self, access_token: &str) -> BackendResult<()>;

    /// Exchanges credentials for a new session.
    ///
    /// Returns `Ok(None)` when the backend rejects the credentials.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Option<Session>>;

    /// Reports whether the backend is currently reachable.
    async fn health_check(&self) -> bool;
}
