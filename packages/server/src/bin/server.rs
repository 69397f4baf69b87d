//! Chat relay server.
//!
//! Serves a page with the recent history and relays every message posted
//! on the live channel to every connected client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatrelay-server
//! cargo run --bin chatrelay-server -- --host 0.0.0.0 --port 3000
//! ```

use std::{sync::Arc, time::Duration};

use chatrelay_server::{
    config::ServerConfig,
    domain::DEFAULT_HISTORY_CAPACITY,
    hub::{BroadcastHub, ConnectionRegistry},
    infrastructure::renderer::HtmlMessageRenderer,
    ui::Server,
};
use chatrelay_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatrelay-server")]
#[command(about = "Real-time chat relay with history replay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8888")]
    port: u16,

    /// Messages kept for replay; the history is cleared when it overflows
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    history_capacity: usize,

    /// Per-connection delivery timeout in milliseconds
    #[arg(long, default_value = "5000")]
    delivery_timeout_ms: u64,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            history_capacity: args.history_capacity,
            delivery_timeout: Duration::from_millis(args.delivery_timeout_ms),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_BIN_NAME"), "tower_http"], "debug");

    let config = ServerConfig::from(Args::parse());

    // Initialize dependencies in order:
    // 1. Registry
    // 2. Renderer
    // 3. Hub
    // 4. Server
    let registry = Arc::new(ConnectionRegistry::new());
    let renderer = Arc::new(HtmlMessageRenderer);
    let hub = Arc::new(BroadcastHub::new(
        registry,
        renderer,
        config.history_capacity,
        config.delivery_timeout,
    ));
    tracing::info!(
        "Hub ready (history capacity {}, delivery timeout {:?})",
        config.history_capacity,
        config.delivery_timeout
    );

    let server = Server::new(hub);
    if let Err(e) = server.run(&config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
