//! Server runner: route wiring, listener binding, graceful shutdown.

use std::sync::Arc;

use axum::{Router, routing::get};
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    domain::SessionRegistry,
    infrastructure::InMemorySessionRegistry,
    ui::{
        handler::{health_check, list_sessions, websocket_handler},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Process-level failures while starting or serving
#[derive(Debug, Error)]
pub enum ServerError {
    /// Listener bind or serve I/O failure
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the axum application around a shared registry.
pub fn build_app(registry: Arc<dyn SessionRegistry>) -> Router {
    let state = Arc::new(AppState { registry });

    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/sessions", get(list_sessions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the relay server until a shutdown signal arrives.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let registry: Arc<dyn SessionRegistry> =
        Arc::new(InMemorySessionRegistry::with_capacity(config.session_capacity));
    let app = build_app(registry);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
