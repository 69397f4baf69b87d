//! Server configuration.

use std::time::Duration;

use crate::{domain::DEFAULT_HISTORY_CAPACITY, hub::DEFAULT_DELIVERY_TIMEOUT};

/// Runtime settings for the relay server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to (e.g., "127.0.0.1")
    pub host: String,
    /// Port number to bind to
    pub port: u16,
    /// Messages kept for replay before the history is cleared
    pub history_capacity: usize,
    /// Per-connection delivery timeout during fan-out
    pub delivery_timeout: Duration,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            delivery_timeout: DEFAULT_DELIVERY_TIMEOUT,
        }
    }
}
