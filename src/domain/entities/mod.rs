//! Core domain entities mirrored from the helpdesk backend.
//!
//! All entities are read-only snapshots: the backend owns their lifecycle and
//! this crate never creates or mutates them.
//!
//! - [`Profile`] - user metadata with a [`Role`]
//! - [`Ticket`] - support request with a [`TicketStatus`]
//! - [`Session`] / [`SessionContext`] - authentication state for one request

pub mod profile;
pub mod session;
pub mod ticket;

pub use profile::{Profile, Role, UnknownRole};
pub use session::{Session, SessionContext};
pub use ticket::{Ticket, TicketStatus};
