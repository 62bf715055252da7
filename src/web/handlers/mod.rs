//! HTML template rendering handlers for the portal.

mod dashboard;
mod landing;
mod sign_in;
mod sign_out;

pub use dashboard::{DashboardTemplate, dashboard_handler};
pub use landing::{LandingTemplate, landing_handler};
pub use sign_in::{SignInForm, sign_in_handler, sign_in_page};
pub use sign_out::sign_out_handler;
