//! # Helpdesk Portal
//!
//! Server-rendered landing page and dashboard for a helpdesk ticketing
//! product, built with Axum and Askama.
//!
//! Identity, profiles and tickets live in an external hosted backend
//! (GoTrue-style auth plus a PostgREST query API). This crate resolves the
//! caller's session, fetches a read-only snapshot, and renders it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the [`domain::backend::Backend`] trait
//! - **Application Layer** ([`application`]) - Presentation rules, surfaces, session service
//! - **Infrastructure Layer** ([`infrastructure`]) - Hosted and in-memory backends
//! - **API Layer** ([`api`]) - Health endpoint and shared middleware
//! - **Web Layer** ([`web`]) - HTML pages, cookies and extractors
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKEND_URL="https://xyzcompany.supabase.co"
//! export BACKEND_ANON_KEY="eyJhbGciOi..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::SessionService;
    pub use crate::application::surfaces::DashboardSurface;
    pub use crate::domain::backend::{Backend, BackendError};
    pub use crate::domain::entities::{Profile, Role, Session, SessionContext, Ticket, TicketStatus};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryBackend;
    pub use crate::state::AppState;
    pub use crate::web::cookies::CookiePolicy;
}
