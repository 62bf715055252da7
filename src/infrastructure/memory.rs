//! In-process backend seeded with fixed data.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::backend::{Backend, BackendError, BackendResult};
use crate::domain::entities::{Profile, Session, Ticket};

/// Backend operation that can be made to fail with [`InMemoryBackend::failing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CurrentSession,
    Profile,
    RecentTickets,
    EndSession,
    SignIn,
    Health,
}

struct Account {
    email: String,
    password: String,
    user_id: String,
}

/// A [`Backend`] kept entirely in memory.
///
/// Used by integration tests and local demos. Tickets are returned newest
/// first regardless of insertion order; sessions issued by sign-in can be
/// ended again.
///
/// # Example
///
/// ```rust
/// use helpdesk_portal::infrastructure::memory::InMemoryBackend;
///
/// let backend = InMemoryBackend::new()
///     .with_account("dana@example.com", "hunter2", "user-1")
///     .with_session("token-1", "user-1");
/// ```
#[derive(Default)]
pub struct InMemoryBackend {
    accounts: Vec<Account>,
    sessions: RwLock<HashMap<String, Session>>,
    profiles: HashMap<String, Profile>,
    tickets: Vec<Ticket>,
    failing: HashSet<Operation>,
    issued: AtomicUsize,
    ticket_fetches: AtomicUsize,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers credentials that sign in as `user_id`.
    pub fn with_account(mut self, email: &str, password: &str, user_id: &str) -> Self {
        self.accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            user_id: user_id.to_string(),
        });
        self
    }

    /// Registers an already issued access token for `user_id`.
    pub fn with_session(mut self, access_token: &str, user_id: &str) -> Self {
        let email = self
            .accounts
            .iter()
            .find(|a| a.user_id == user_id)
            .map(|a| a.email.clone());

        self.sessions.get_mut().insert(
            access_token.to_string(),
            Session {
                user_id: user_id.to_string(),
                email,
                access_token: access_token.to_string(),
            },
        );
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.insert(profile.id.clone(), profile);
        self
    }

    pub fn with_tickets(mut self, tickets: impl IntoIterator<Item = Ticket>) -> Self {
        self.tickets.extend(tickets);
        self
    }

    /// Makes `operation` fail with a transport error.
    pub fn failing(mut self, operation: Operation) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Number of recent-ticket listings served so far.
    pub fn ticket_fetch_count(&self) -> usize {
        self.ticket_fetches.load(Ordering::SeqCst)
    }

    /// Returns whether `access_token` still maps to a session.
    pub async fn has_session(&self, access_token: &str) -> bool {
        self.sessions.read().await.contains_key(access_token)
    }

    fn check(&self, operation: Operation) -> BackendResult<()> {
        if self.failing.contains(&operation) {
            return Err(BackendError::Transport(format!(
                "simulated outage for {operation:?}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn get_current_session(&self, access_token: &str) -> BackendResult<Option<Session>> {
        self.check(Operation::CurrentSession)?;
        Ok(self.sessions.read().await.get(access_token).cloned())
    }

    async fn get_profile(&self, session: &Session) -> BackendResult<Option<Profile>> {
        self.check(Operation::Profile)?;
        Ok(self.profiles.get(&session.user_id).cloned())
    }

    async fn list_recent_tickets(
        &self,
        _session: &Session,
        limit: usize,
    ) -> BackendResult<Vec<Ticket>> {
        self.ticket_fetches.fetch_add(1, Ordering::SeqCst);
        self.check(Operation::RecentTickets)?;

        let mut tickets = self.tickets.clone();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tickets.truncate(limit);
        Ok(tickets)
    }

    async fn end_session(&self, access_token: &str) -> BackendResult<()> {
        self.check(Operation::EndSession)?;
        if self.sessions.write().await.remove(access_token).is_none() {
            debug!("Ending a session that does not exist");
        }
        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Option<Session>> {
        self.check(Operation::SignIn)?;

        let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == password)
        else {
            return Ok(None);
        };

        let n = self.issued.fetch_add(1, Ordering::SeqCst);
        let session = Session {
            user_id: account.user_id.clone(),
            email: Some(account.email.clone()),
            access_token: format!("mem-{}-{n}", account.user_id),
        };

        self.sessions
            .write()
            .await
            .insert(session.access_token.clone(), session.clone());

        Ok(Some(session))
    }

    async fn health_check(&self) -> bool {
        self.check(Operation::Health).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Role, TicketStatus};
    use chrono::{Duration, TimeZone, Utc};

    fn ticket(id: &str, hours_ago: i64) -> Ticket {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();
        Ticket {
            id: id.to_string(),
            subject: id.to_string(),
            description: String::new(),
            status: TicketStatus::Open,
            created_at: now - Duration::hours(hours_ago),
            upvotes: 0,
            category: None,
        }
    }

    #[tokio::test]
    async fn test_recent_tickets_newest_first_and_limited() {
        let backend = InMemoryBackend::new().with_tickets([
            ticket("old", 10),
            ticket("newest", 0),
            ticket("middle", 5),
        ]);
        let session = Session {
            user_id: "u".to_string(),
            email: None,
            access_token: "t".to_string(),
        };

        let tickets = backend.list_recent_tickets(&session, 2).await.unwrap();
        let ids: Vec<_> = tickets.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec!["newest", "middle"]);
        assert_eq!(backend.ticket_fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_issues_session_that_can_be_ended() {
        let backend = InMemoryBackend::new()
            .with_account("dana@example.com", "hunter2", "user-1")
            .with_profile(Profile {
                id: "user-1".to_string(),
                full_name: None,
                role: Role::Agent,
            });

        assert_eq!(
            backend
                .sign_in_with_password("dana@example.com", "nope")
                .await
                .unwrap(),
            None
        );

        let session = backend
            .sign_in_with_password("dana@example.com", "hunter2")
            .await
            .unwrap()
            .unwrap();
        assert!(backend.has_session(&session.access_token).await);
        assert_eq!(
            backend
                .get_current_session(&session.access_token)
                .await
                .unwrap(),
            Some(session.clone())
        );

        backend.end_session(&session.access_token).await.unwrap();
        assert!(!backend.has_session(&session.access_token).await);
    }

    #[tokio::test]
    async fn test_failing_operation() {
        let backend = InMemoryBackend::new()
            .with_session("tok", "u1")
            .failing(Operation::CurrentSession)
            .failing(Operation::Health);

        assert!(matches!(
            backend.get_current_session("tok").await,
            Err(BackendError::Transport(_))
        ));
        assert!(!backend.health_check().await);
    }
}
