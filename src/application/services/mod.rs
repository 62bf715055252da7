//! Application services orchestrating backend calls.

pub mod session_service;

pub use session_service::{SessionService, SignInOutcome, SignOutOutcome};
