//! Presentation rules for tickets and dashboard affordances.
//!
//! Every function here is pure: no backend calls, no I/O. The web templates and
//! the `helpdeskctl` CLI both render through these rules.

use crate::application::navigation::Route;
use crate::domain::entities::{Profile, Ticket, TicketStatus};

/// Number of tickets shown in the dashboard's recent list.
pub const RECENT_TICKETS_LIMIT: usize = 5;

/// Characters of the description kept in a list preview.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Suffix appended to every description preview.
pub const ELLIPSIS: &str = "...";

/// Display style of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusStyle {
    Info,
    Warning,
    Success,
    Muted,
}

impl StatusStyle {
    /// CSS class applied to the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "status-info",
            Self::Warning => "status-warning",
            Self::Success => "status-success",
            Self::Muted => "status-muted",
        }
    }

    /// Terminal color used by `helpdeskctl`.
    pub fn terminal_color(&self) -> colored::Color {
        match self {
            Self::Info => colored::Color::Blue,
            Self::Warning => colored::Color::Yellow,
            Self::Success => colored::Color::Green,
            Self::Muted => colored::Color::BrightBlack,
        }
    }
}

/// Maps a ticket status to its badge style.
///
/// Statuses outside the known set share the `closed` style.
pub fn status_style(status: TicketStatus) -> StatusStyle {
    match status {
        TicketStatus::Open => StatusStyle::Info,
        TicketStatus::InProgress => StatusStyle::Warning,
        TicketStatus::Resolved => StatusStyle::Success,
        TicketStatus::Closed | TicketStatus::Unknown => StatusStyle::Muted,
    }
}

/// Returns the description preview shown in ticket lists.
///
/// Keeps the first [`DESCRIPTION_PREVIEW_CHARS`] characters and always appends
/// [`ELLIPSIS`], even when nothing was cut.
pub fn truncate_description(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str(ELLIPSIS);
    preview
}

/// Whether the admin panel tile is shown.
///
/// Presentational only: the backend enforces authorization for admin operations.
pub fn shows_admin_tile(profile: Option<&Profile>) -> bool {
    profile.is_some_and(|p| p.role.is_staff())
}

/// A navigation tile in the dashboard's quick-actions grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

impl QuickAction {
    pub fn href(&self) -> String {
        self.route.path()
    }
}

/// Quick-action tiles for the given profile, in display order.
pub fn quick_actions(profile: Option<&Profile>) -> Vec<QuickAction> {
    let mut actions = vec![
        QuickAction {
            title: "Create ticket",
            description: "Report a problem or ask a question",
            route: Route::TicketCreate,
        },
        QuickAction {
            title: "View tickets",
            description: "Browse and upvote existing tickets",
            route: Route::TicketList,
        },
    ];

    if shows_admin_tile(profile) {
        actions.push(QuickAction {
            title: "Admin panel",
            description: "Triage tickets and manage categories",
            route: Route::Admin,
        });
    }

    actions
}

/// A ticket prepared for a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    pub href: String,
    pub subject: String,
    pub preview: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub category: Option<String>,
    pub upvotes: u32,
    pub created_at: String,
}

impl TicketRow {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            href: Route::TicketDetail(ticket.id.clone()).path(),
            subject: ticket.subject.clone(),
            preview: truncate_description(&ticket.description),
            status_label: ticket.status.label(),
            status_class: status_style(ticket.status).css_class(),
            category: ticket.category.clone(),
            upvotes: ticket.upvotes,
            created_at: ticket.created_at.format("%b %-d, %Y").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use chrono::{TimeZone, Utc};

    fn profile(role: Role) -> Profile {
        Profile {
            id: "u1".to_string(),
            full_name: Some("Test User".to_string()),
            role,
        }
    }

    fn ticket(status: TicketStatus, category: Option<&str>) -> Ticket {
        Ticket {
            id: "t-42".to_string(),
            subject: "Printer jammed".to_string(),
            description: "The third floor printer eats every page.".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2026, 3, 7, 9, 30, 0).unwrap(),
            upvotes: 3,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_status_style_known_statuses() {
        assert_eq!(status_style(TicketStatus::Open), StatusStyle::Info);
        assert_eq!(status_style(TicketStatus::InProgress), StatusStyle::Warning);
        assert_eq!(status_style(TicketStatus::Resolved), StatusStyle::Success);
        assert_eq!(status_style(TicketStatus::Closed), StatusStyle::Muted);
    }

    #[test]
    fn test_status_style_unknown_matches_closed() {
        assert_eq!(
            status_style(TicketStatus::Unknown),
            status_style(TicketStatus::Closed)
        );
        assert_eq!(
            status_style(TicketStatus::from_backend("escalated")),
            status_style(TicketStatus::Closed)
        );
    }

    #[test]
    fn test_status_css_classes_are_distinct_and_non_empty() {
        let classes: Vec<_> = [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
        .into_iter()
        .map(|s| status_style(s).css_class())
        .collect();

        assert!(classes.iter().all(|c| !c.is_empty()));
        let unique: std::collections::HashSet<_> = classes.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_unknown_status_uses_closed_terminal_color() {
        assert_eq!(
            status_style(TicketStatus::Unknown).terminal_color(),
            status_style(TicketStatus::Closed).terminal_color()
        );
        assert_ne!(
            status_style(TicketStatus::Open).terminal_color(),
            status_style(TicketStatus::Resolved).terminal_color()
        );
    }

    #[test]
    fn test_truncate_long_description() {
        let text = "x".repeat(250);
        let preview = truncate_description(&text);

        assert_eq!(preview, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_truncate_short_description_still_gets_ellipsis() {
        let text = "a".repeat(50);
        assert_eq!(truncate_description(&text), format!("{text}..."));
    }

    #[test]
    fn test_truncate_exact_limit_and_empty() {
        let text = "b".repeat(100);
        assert_eq!(truncate_description(&text), format!("{text}..."));
        assert_eq!(truncate_description(""), "...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "ü".repeat(120);
        let preview = truncate_description(&text);

        assert_eq!(preview.chars().count(), 100 + ELLIPSIS.len());
        assert!(preview.starts_with(&"ü".repeat(100)));
    }

    #[test]
    fn test_admin_tile_visibility() {
        assert!(shows_admin_tile(Some(&profile(Role::Admin))));
        assert!(shows_admin_tile(Some(&profile(Role::Agent))));
        assert!(!shows_admin_tile(Some(&profile(Role::User))));
        assert!(!shows_admin_tile(None));
    }

    #[test]
    fn test_quick_actions_for_staff_include_admin() {
        let routes: Vec<_> = quick_actions(Some(&profile(Role::Agent)))
            .into_iter()
            .map(|a| a.route)
            .collect();

        assert_eq!(
            routes,
            vec![Route::TicketCreate, Route::TicketList, Route::Admin]
        );
    }

    #[test]
    fn test_quick_actions_without_profile_omit_admin() {
        let actions = quick_actions(None);

        assert_eq!(actions.len(), 2);
        assert!(actions.iter().all(|a| a.route != Route::Admin));
        assert_eq!(actions[0].href(), "/tickets/new");
    }

    #[test]
    fn test_ticket_row_from_ticket() {
        let row = TicketRow::from_ticket(&ticket(TicketStatus::InProgress, Some("Hardware")));

        assert_eq!(row.href, "/tickets/t-42");
        assert_eq!(row.subject, "Printer jammed");
        assert_eq!(row.preview, "The third floor printer eats every page....");
        assert_eq!(row.status_label, "In progress");
        assert_eq!(row.status_class, "status-warning");
        assert_eq!(row.category.as_deref(), Some("Hardware"));
        assert_eq!(row.upvotes, 3);
        assert_eq!(row.created_at, "Mar 7, 2026");
    }

    #[test]
    fn test_ticket_row_without_category() {
        let row = TicketRow::from_ticket(&ticket(TicketStatus::Open, None));
        assert!(row.category.is_none());
    }
}
