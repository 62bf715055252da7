//! JSON payloads exchanged with GoTrue and PostgREST.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::backend::BackendError;
use crate::domain::entities::{Profile, Role, Session, Ticket, TicketStatus};

/// Columns requested for the recent tickets listing, with the category embedded.
pub const TICKET_PROJECTION: &str =
    "id,subject,description,status,created_at,upvotes,category:categories(name)";

/// Columns requested for a profile row.
pub const PROFILE_PROJECTION: &str = "id,full_name,role";

/// `GET /auth/v1/user` response.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `POST /auth/v1/token?grant_type=password` request body.
#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /auth/v1/token` response.
#[derive(Debug, Deserialize)]
pub struct TokenPayload {
    pub access_token: String,
    pub user: UserPayload,
}

impl TokenPayload {
    pub fn into_session(self) -> Session {
        Session {
            user_id: self.user.id,
            email: self.user.email,
            access_token: self.access_token,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileRow {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = BackendError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        Ok(Profile {
            id: row.id,
            full_name: row.full_name,
            role,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TicketRow {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub upvotes: Option<u32>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            id: row.id,
            subject: row.subject,
            description: row.description.unwrap_or_default(),
            status: TicketStatus::from_backend(&row.status),
            created_at: row.created_at,
            upvotes: row.upvotes.unwrap_or(0),
            category: row.category.map(|c| c.name),
        }
    }
}

/// Accepts both UUID strings and integer primary keys.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ticket_row_with_category() {
        let row: TicketRow = serde_json::from_value(json!({
            "id": "5b0c",
            "subject": "VPN drops",
            "description": "Every 10 minutes",
            "status": "in_progress",
            "created_at": "2026-10-01T08:15:00.123456+00:00",
            "upvotes": 4,
            "category": { "name": "Network" }
        }))
        .unwrap();

        let ticket = Ticket::from(row);
        assert_eq!(ticket.id, "5b0c");
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.upvotes, 4);
        assert_eq!(ticket.category.as_deref(), Some("Network"));
    }

    #[test]
    fn test_ticket_row_null_category_and_numeric_id() {
        let row: TicketRow = serde_json::from_value(json!({
            "id": 17,
            "subject": "Keyboard",
            "description": null,
            "status": "on_hold",
            "created_at": "2026-10-01T08:15:00Z",
            "upvotes": null,
            "category": null
        }))
        .unwrap();

        let ticket = Ticket::from(row);
        assert_eq!(ticket.id, "17");
        assert_eq!(ticket.description, "");
        assert_eq!(ticket.status, TicketStatus::Unknown);
        assert_eq!(ticket.upvotes, 0);
        assert!(ticket.category.is_none());
    }

    #[test]
    fn test_negative_upvotes_are_rejected() {
        let result = serde_json::from_value::<TicketRow>(json!({
            "id": "x",
            "subject": "s",
            "status": "open",
            "created_at": "2026-10-01T08:15:00Z",
            "upvotes": -1
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_profile_row_conversion() {
        let row: ProfileRow = serde_json::from_value(json!({
            "id": "user-1",
            "full_name": "Dana",
            "role": "admin"
        }))
        .unwrap();

        let profile = Profile::try_from(row).unwrap();
        assert_eq!(profile.role, Role::Admin);
        assert_eq!(profile.display_name(), "Dana");
    }

    #[test]
    fn test_profile_row_unknown_role() {
        let row: ProfileRow = serde_json::from_value(json!({
            "id": "user-1",
            "role": "owner"
        }))
        .unwrap();

        assert!(matches!(
            Profile::try_from(row),
            Err(BackendError::Decode(_))
        ));
    }
}
