//! Page surfaces: decide between redirecting and rendering for one visit.
//!
//! Surfaces receive the caller's [`crate::domain::entities::SessionContext`]
//! explicitly and never read cookies or globals, which keeps them testable
//! with injected backends.

pub mod dashboard;
pub mod landing;

pub use dashboard::{DashboardOutcome, DashboardSurface, DashboardView};
pub use landing::LandingOutcome;
