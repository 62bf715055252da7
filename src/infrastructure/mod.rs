//! Infrastructure layer: concrete [`crate::domain::backend::Backend`] implementations.
//!
//! # Modules
//!
//! - [`supabase`] - HTTP client for the hosted backend
//! - [`memory`] - in-process backend for tests and demos

pub mod memory;
pub mod supabase;
