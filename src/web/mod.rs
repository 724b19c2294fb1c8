//! HTTP surface: the form page, the forecast endpoint and static assets

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::RainCheckConfig;
use crate::service::RainCheckService;
use crate::weather::OpenMeteoClient;

pub mod handlers;
pub mod views;

/// Largest accepted form body
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Shared, immutable per-process state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RainCheckService>,
}

impl AppState {
    pub fn new(config: &RainCheckConfig) -> Result<Self> {
        let client = OpenMeteoClient::new(&config.weather)?;
        Ok(Self {
            service: Arc::new(RainCheckService::new(client)),
        })
    }
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/forecast", post(handlers::forecast))
        .route("/healthz", get(handlers::healthz))
        .fallback_service(ServeDir::new(static_dir))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
pub async fn run(config: RainCheckConfig) -> Result<()> {
    let state = AppState::new(&config)?;
    let app = router(state, &config.server.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server running on http://localhost:{}", config.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
