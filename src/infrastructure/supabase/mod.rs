//! Hosted backend client (GoTrue auth + PostgREST rows).

mod client;
mod wire;

pub use client::SupabaseBackend;
pub use wire::{PROFILE_PROJECTION, TICKET_PROJECTION};
