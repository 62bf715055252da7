//! Ticket entity and its closed set of lifecycle statuses.

use chrono::{DateTime, Utc};
use std::fmt;

/// Lifecycle status of a support ticket.
///
/// The backend only ever stores the four named states. Any other value is
/// decoded as [`TicketStatus::Unknown`] instead of failing the whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    Unknown,
}

impl TicketStatus {
    /// Decodes the backend's wire value (`open`, `in_progress`, `resolved`, `closed`).
    pub fn from_backend(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "in_progress" => Self::InProgress,
            "resolved" => Self::Resolved,
            "closed" => Self::Closed,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label shown in ticket badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of a ticket as returned by the backend.
///
/// `category` holds only the related category's name, or `None` when the
/// ticket is uncategorised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub upvotes: u32,
    pub category: Option<String>,
}
