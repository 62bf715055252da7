#![allow(dead_code)]

use axum::http::HeaderValue;
use chrono::{Duration, TimeZone, Utc};
use helpdesk_portal::domain::entities::{Profile, Role, Ticket, TicketStatus};
use helpdesk_portal::infrastructure::memory::InMemoryBackend;
use helpdesk_portal::state::AppState;
use helpdesk_portal::web::cookies::CookiePolicy;
use std::sync::Arc;

pub const USER_ID: &str = "user-1";
pub const EMAIL: &str = "dana@example.com";
pub const PASSWORD: &str = "correct horse";
pub const TOKEN: &str = "token-1";

pub fn create_test_state(backend: InMemoryBackend) -> AppState {
    create_shared_state(Arc::new(backend))
}

/// Same as [`create_test_state`] but lets the test keep a handle for inspection.
pub fn create_shared_state(backend: Arc<InMemoryBackend>) -> AppState {
    AppState::new(backend, CookiePolicy::new(false))
}

/// A backend with one account that already holds [`TOKEN`].
pub fn signed_in_backend(role: Role) -> InMemoryBackend {
    InMemoryBackend::new()
        .with_account(EMAIL, PASSWORD, USER_ID)
        .with_session(TOKEN, USER_ID)
        .with_profile(Profile {
            id: USER_ID.to_string(),
            full_name: Some("Dana Scully".to_string()),
            role,
        })
}

/// `Cookie` header carrying the session token.
pub fn session_cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("sb-access-token={token}")).unwrap()
}

/// A ticket created `days_ago` days before a fixed reference date.
pub fn ticket(id: &str, days_ago: i64) -> Ticket {
    let base = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    Ticket {
        id: id.to_string(),
        subject: format!("Subject {id}"),
        description: format!("Description of {id}"),
        status: TicketStatus::Open,
        created_at: base - Duration::days(days_ago),
        upvotes: 0,
        category: None,
    }
}

/// All `Set-Cookie` values of a response.
pub fn set_cookies(response: &axum_test::TestResponse) -> Vec<String> {
    response
        .headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}
