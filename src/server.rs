//! HTTP server initialization and runtime setup.
//!
//! Builds the backend client, wires application state, and runs the Axum
//! server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::backend::Backend;
use crate::infrastructure::supabase::SupabaseBackend;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::cookies::CookiePolicy;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Backend client (reachability is probed but not required at startup)
/// - Application state and router
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The backend client cannot be built from the configuration
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let backend = SupabaseBackend::new(
        &config.backend_url,
        config.backend_anon_key.clone(),
        config.backend_timeout(),
    )
    .context("Failed to build backend client")?;

    if backend.health_check().await {
        tracing::info!("Backend reachable at {}", backend.base_url());
    } else {
        tracing::warn!(
            "Backend at {} did not answer its health probe; pages will degrade until it does",
            backend.base_url()
        );
    }

    let state = AppState::new(Arc::new(backend), CookiePolicy::new(config.cookie_secure));

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
