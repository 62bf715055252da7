//! Application layer: presentation rules, surfaces and services.
//!
//! Services and surfaces consume the [`crate::domain::backend::Backend`] trait
//! and hand plain view data to the web layer.
//!
//! # Modules
//!
//! - [`navigation`] - destinations the portal links or redirects to
//! - [`presentation`] - status styles, description previews, role-gated tiles
//! - [`surfaces`] - landing and dashboard decisions per visit
//! - [`services`] - session resolution, sign-in and sign-out

pub mod navigation;
pub mod presentation;
pub mod services;
pub mod surfaces;
