//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::SessionService;
use crate::application::surfaces::DashboardSurface;
use crate::domain::backend::Backend;
use crate::web::cookies::CookiePolicy;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub session_service: Arc<SessionService>,
    pub dashboard: Arc<DashboardSurface>,
    pub cookies: CookiePolicy,
}

impl AppState {
    /// Wires services and surfaces around one backend.
    pub fn new(backend: Arc<dyn Backend>, cookies: CookiePolicy) -> Self {
        Self {
            session_service: Arc::new(SessionService::new(backend.clone())),
            dashboard: Arc::new(DashboardSurface::new(backend.clone())),
            backend,
            cookies,
        }
    }
}
