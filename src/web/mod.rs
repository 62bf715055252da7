//! Web layer for the browser-facing portal.
//!
//! Provides the landing page, dashboard and sign-in flow as server-rendered
//! HTML. Uses Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`extract`] - Session and flash notice extractors
//! - [`cookies`] - Cookie parsing and `Set-Cookie` construction
//! - [`routes`] - Portal route configuration

pub mod cookies;
pub mod extract;
pub mod handlers;
pub mod routes;
