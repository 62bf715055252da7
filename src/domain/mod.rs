//! Domain layer: entities and the backend boundary.
//!
//! # Architecture
//!
//! - [`entities`] - read-only snapshots of backend records
//! - [`backend`] - the [`backend::Backend`] trait every data access goes through
//! - [`fetched`] - [`fetched::Fetched`], the outcome of a backend read
//!
//! The domain layer has no dependency on HTTP, templates, or a concrete backend.

pub mod backend;
pub mod entities;
pub mod fetched;
