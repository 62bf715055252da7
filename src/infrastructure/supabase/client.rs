//! Supabase-style backend client over HTTPS/JSON.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::wire::{
    PROFILE_PROJECTION, PasswordGrant, ProfileRow, TICKET_PROJECTION, TicketRow, TokenPayload,
    UserPayload,
};
use crate::domain::backend::{Backend, BackendError, BackendResult};
use crate::domain::entities::{Profile, Session, Ticket};

/// Longest slice of an error body kept in [`BackendError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            BackendError::Decode(e.to_string())
        } else {
            BackendError::Transport(e.to_string())
        }
    }
}

/// Backend client for a hosted project exposing GoTrue under `/auth/v1` and
/// PostgREST under `/rest/v1`.
///
/// Every request carries the project's anon key in the `apikey` header.
/// Row reads are sent with the caller's access token so the backend's
/// row-level policies apply to the signed-in user.
#[derive(Clone)]
pub struct SupabaseBackend {
    http: Client,
    base_url: Url,
    anon_key: String,
}

impl SupabaseBackend {
    /// Creates a client for the project at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Config`] if the URL is not http(s) or the HTTP
    /// client cannot be built.
    pub fn new(
        base_url: &str,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> BackendResult<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| BackendError::Config(format!("{base_url}: {e}")))?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(BackendError::Config(format!(
                "unsupported scheme '{}'",
                base_url.scheme()
            )));
        }

        // Relative joins would otherwise replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            anon_key: anon_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> BackendResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::Config(format!("{path}: {e}")))
    }

    fn recent_tickets_url(&self, limit: usize) -> BackendResult<Url> {
        let mut url = self.endpoint("rest/v1/tickets")?;
        url.query_pairs_mut()
            .append_pair("select", TICKET_PROJECTION)
            .append_pair("order", "created_at.desc")
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    fn profile_url(&self, user_id: &str) -> BackendResult<Url> {
        let mut url = self.endpoint("rest/v1/profiles")?;
        url.query_pairs_mut()
            .append_pair("select", PROFILE_PROJECTION)
            .append_pair("id", &format!("eq.{user_id}"))
            .append_pair("limit", "1");
        Ok(url)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        self.http
            .get(url)
            .header("apikey", &self.anon_key)
            .header(header::ACCEPT, "application/json")
    }

    fn post(&self, url: Url) -> RequestBuilder {
        self.http
            .post(url)
            .header("apikey", &self.anon_key)
            .header(header::ACCEPT, "application/json")
    }
}

/// Converts a non-success response into [`BackendError::Status`].
async fn status_error(response: Response) -> BackendError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    BackendError::Status {
        status,
        body: body.chars().take(ERROR_BODY_LIMIT).collect(),
    }
}

#[async_trait]
impl Backend for SupabaseBackend {
    async fn get_current_session(&self, access_token: &str) -> BackendResult<Option<Session>> {
        let response = self
            .get(self.endpoint("auth/v1/user")?)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => {
                let user: UserPayload = response.json().await?;
                Ok(Some(Session {
                    user_id: user.id,
                    email: user.email,
                    access_token: access_token.to_string(),
                }))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            _ => Err(status_error(response).await),
        }
    }

    async fn get_profile(&self, session: &Session) -> BackendResult<Option<Profile>> {
        let response = self
            .get(self.profile_url(&session.user_id)?)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let rows: Vec<ProfileRow> = response.json().await?;
        rows.into_iter().next().map(Profile::try_from).transpose()
    }

    async fn list_recent_tickets(
        &self,
        session: &Session,
        limit: usize,
    ) -> BackendResult<Vec<Ticket>> {
        let response = self
            .get(self.recent_tickets_url(limit)?)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let rows: Vec<TicketRow> = response.json().await?;
        debug!(count = rows.len(), "Fetched recent tickets");
        Ok(rows.into_iter().map(Ticket::from).collect())
    }

    async fn end_session(&self, access_token: &str) -> BackendResult<()> {
        let response = self
            .post(self.endpoint("auth/v1/logout")?)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => Ok(()),
            // The token is already invalid, so there is no session left to end.
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!("Logout called with an already invalid token");
                Ok(())
            }
            _ => Err(status_error(response).await),
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Option<Session>> {
        let mut url = self.endpoint("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .post(url)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => {
                let token: TokenPayload = response.json().await?;
                Ok(Some(token.into_session()))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            _ => Err(status_error(response).await),
        }
    }

    async fn health_check(&self) -> bool {
        let url = match self.endpoint("auth/v1/health") {
            Ok(url) => url,
            Err(e) => {
                warn!("Health endpoint unavailable: {}", e);
                return false;
            }
        };

        match self.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Backend health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> SupabaseBackend {
        SupabaseBackend::new(base, "anon", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        assert_eq!(
            backend("https://demo.supabase.co").base_url().as_str(),
            "https://demo.supabase.co/"
        );
        assert_eq!(
            backend("https://gateway.example.com/helpdesk")
                .endpoint("auth/v1/user")
                .unwrap()
                .as_str(),
            "https://gateway.example.com/helpdesk/auth/v1/user"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = SupabaseBackend::new("ftp://demo", "anon", Duration::from_secs(5));
        assert!(matches!(result, Err(BackendError::Config(_))));

        let result = SupabaseBackend::new("not a url", "anon", Duration::from_secs(5));
        assert!(matches!(result, Err(BackendError::Config(_))));
    }

    #[test]
    fn test_recent_tickets_query() {
        let url = backend("https://demo.supabase.co")
            .recent_tickets_url(5)
            .unwrap();

        assert_eq!(url.path(), "/rest/v1/tickets");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("select".to_string(), TICKET_PROJECTION.to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_profile_query_filters_by_owner() {
        let url = backend("https://demo.supabase.co")
            .profile_url("user-1")
            .unwrap();

        assert_eq!(url.path(), "/rest/v1/profiles");
        assert!(
            url.query_pairs()
                .any(|(k, v)| k == "id" && v == "eq.user-1")
        );
    }
}
