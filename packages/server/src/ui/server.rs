//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::ServerConfig, hub::BroadcastHub};

use super::{
    handler::{health_check, index, list_messages, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Chat relay server
///
/// Wires the hub into the HTTP and WebSocket routes.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(hub);
/// server.run(&ServerConfig::default()).await?;
/// ```
pub struct Server {
    hub: Arc<BroadcastHub>,
}

impl Server {
    pub fn new(hub: Arc<BroadcastHub>) -> Self {
        Self { hub }
    }

    /// Build the router without binding it
    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            hub: self.hub.clone(),
        });

        Router::new()
            // Page
            .route("/", get(index))
            // WebSocket endpoint
            .route("/chatsocket", get(websocket_handler))
            // HTTP endpoints
            .route("/api/health", get(health_check))
            .route("/api/messages", get(list_messages))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the chat relay server
    ///
    /// Binds to `config.bind_addr()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat relay listening on {}", listener.local_addr()?);
        tracing::info!("Open http://{}/ in a browser", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    pub async fn serve(self, listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
