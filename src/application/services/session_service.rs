//! Session resolution, sign-in and sign-out against the backend.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::backend::Backend;
use crate::domain::entities::{Session, SessionContext};

/// Result of a sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    SignedIn(Session),
    /// The backend rejected the credentials.
    Rejected,
    /// The backend could not be asked.
    Unavailable(String),
}

/// Result of a sign-out attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut,
    Failed(String),
}

/// Service wrapping the identity half of the [`Backend`].
pub struct SessionService {
    backend: Arc<dyn Backend>,
}

impl SessionService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Resolves the access token presented by the caller into a [`SessionContext`].
    ///
    /// A missing or blank token is anonymous without asking the backend.
    pub async fn resolve(&self, access_token: Option<&str>) -> SessionContext {
        let Some(token) = access_token.filter(|t| !t.trim().is_empty()) else {
            return SessionContext::Anonymous;
        };

        match self.backend.get_current_session(token).await {
            Ok(Some(session)) => SessionContext::Active(session),
            Ok(None) => {
                debug!("Backend rejected the presented access token");
                SessionContext::Anonymous
            }
            Err(e) => {
                warn!("Session lookup failed: {}", e);
                SessionContext::Unavailable(e.to_string())
            }
        }
    }

    /// Exchanges credentials for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> SignInOutcome {
        match self.backend.sign_in_with_password(email, password).await {
            Ok(Some(session)) => {
                info!(user_id = %session.user_id, "User signed in");
                SignInOutcome::SignedIn(session)
            }
            Ok(None) => SignInOutcome::Rejected,
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                SignInOutcome::Unavailable(e.to_string())
            }
        }
    }

    /// Ends the session behind `access_token`.
    ///
    /// Without a token there is nothing to end and the caller is already signed out.
    pub async fn sign_out(&self, access_token: Option<&str>) -> SignOutOutcome {
        let Some(token) = access_token.filter(|t| !t.trim().is_empty()) else {
            return SignOutOutcome::SignedOut;
        };

        match self.backend.end_session(token).await {
            Ok(()) => SignOutOutcome::SignedOut,
            Err(e) => {
                warn!("Sign-out failed: {}", e);
                SignOutOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::backend::{BackendError, MockBackend};

    fn session() -> Session {
        Session {
            user_id: "user-1".to_string(),
            email: Some("dana@example.com".to_string()),
            access_token: "token-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolve_without_token_skips_backend() {
        let mut backend = MockBackend::new();
        backend.expect_get_current_session().times(0);

        let service = SessionService::new(Arc::new(backend));

        assert_eq!(service.resolve(None).await, SessionContext::Anonymous);
        assert_eq!(service.resolve(Some("  ")).await, SessionContext::Anonymous);
    }

    #[tokio::test]
    async fn test_resolve_active_session() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_current_session()
            .withf(|token| token == "token-1")
            .times(1)
            .returning(|_| Ok(Some(session())));

        let service = SessionService::new(Arc::new(backend));

        assert_eq!(
            service.resolve(Some("token-1")).await,
            SessionContext::Active(session())
        );
    }

    #[tokio::test]
    async fn test_resolve_rejected_token_is_anonymous() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_current_session()
            .times(1)
            .returning(|_| Ok(None));

        let service = SessionService::new(Arc::new(backend));

        assert_eq!(
            service.resolve(Some("expired")).await,
            SessionContext::Anonymous
        );
    }

    #[tokio::test]
    async fn test_resolve_backend_failure_is_unavailable() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_current_session()
            .times(1)
            .returning(|_| Err(BackendError::Transport("connection refused".to_string())));

        let service = SessionService::new(Arc::new(backend));

        assert!(matches!(
            service.resolve(Some("token-1")).await,
            SessionContext::Unavailable(_)
        ));
    }

    #[tokio::test]
    async fn test_sign_in_outcomes() {
        let mut backend = MockBackend::new();
        backend
            .expect_sign_in_with_password()
            .withf(|email, password| email == "dana@example.com" && password == "right")
            .returning(|_, _| Ok(Some(session())));
        backend
            .expect_sign_in_with_password()
            .withf(|_, password| password == "wrong")
            .returning(|_, _| Ok(None));
        backend
            .expect_sign_in_with_password()
            .withf(|_, password| password == "outage")
            .returning(|_, _| Err(BackendError::Transport("timeout".to_string())));

        let service = SessionService::new(Arc::new(backend));

        assert_eq!(
            service.sign_in("dana@example.com", "right").await,
            SignInOutcome::SignedIn(session())
        );
        assert_eq!(
            service.sign_in("dana@example.com", "wrong").await,
            SignInOutcome::Rejected
        );
        assert!(matches!(
            service.sign_in("dana@example.com", "outage").await,
            SignInOutcome::Unavailable(_)
        ));
    }

    #[tokio::test]
    async fn test_sign_out_success() {
        let mut backend = MockBackend::new();
        backend
            .expect_end_session()
            .withf(|token| token == "token-1")
            .times(1)
            .returning(|_| Ok(()));

        let service = SessionService::new(Arc::new(backend));

        assert_eq!(
            service.sign_out(Some("token-1")).await,
            SignOutOutcome::SignedOut
        );
    }

    #[tokio::test]
    async fn test_sign_out_failure_is_reported() {
        let mut backend = MockBackend::new();
        backend.expect_end_session().times(1).returning(|_| {
            Err(BackendError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            })
        });

        let service = SessionService::new(Arc::new(backend));

        assert_eq!(
            service.sign_out(Some("token-1")).await,
            SignOutOutcome::Failed("backend returned 502: bad gateway".to_string())
        );
    }

    #[tokio::test]
    async fn test_sign_out_without_token_skips_backend() {
        let mut backend = MockBackend::new();
        backend.expect_end_session().times(0);

        let service = SessionService::new(Arc::new(backend));

        assert_eq!(service.sign_out(None).await, SignOutOutcome::SignedOut);
    }
}
