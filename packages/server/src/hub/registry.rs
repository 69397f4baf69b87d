//! Registry of live connections.
//!
//! ## Test notes
//!
//! ### What is tested
//! - `register` / `unregister` / `snapshot` membership bookkeeping
//!
//! ### Why
//! - Fan-out iterates the snapshot, so it must be exactly the set of
//!   connections registered and not yet unregistered
//! - Close can race other teardown paths, so removal must never fail
//!
//! ### Scenarios
//! - Register and unregister in sequence and interleaved
//! - Unregister twice, and unregister an unknown id
//! - A snapshot taken before membership changes stays as it was
//! - Many tasks registering and leaving at once

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{Connection, ConnectionId};

/// Set of currently open connections, unique by `ConnectionId`.
///
/// Mutations take the write lock and snapshots take the read lock, so a
/// broadcast pass always iterates a consistent copy of the membership.
#[derive(Default)]
pub struct ConnectionRegistry {
    pub(super) connections: RwLock<HashMap<ConnectionId, Arc<dyn Connection>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a newly established connection.
    pub async fn register(&self, connection: Arc<dyn Connection>) {
        let id = connection.id();

        // Same id twice is a caller bug; keep the newer handle
        let mut connections = self.connections.write().await;
        if connections.insert(id, connection).is_some() {
            tracing::warn!("Connection '{}' was registered twice", id);
        }
        tracing::debug!(
            "Connection '{}' registered ({} active)",
            id,
            connections.len()
        );
    }

    /// Remove a connection. Returns `false` when it was already gone.
    pub async fn unregister(&self, id: &ConnectionId) -> bool {
        let mut connections = self.connections.write().await;
        let removed = connections.remove(id).is_some();
        if removed {
            tracing::debug!(
                "Connection '{}' unregistered ({} active)",
                id,
                connections.len()
            );
        } else {
            tracing::debug!("Connection '{}' already unregistered, ignoring", id);
        }
        removed
    }

    /// Copy of the current membership for one fan-out pass.
    pub async fn snapshot(&self) -> Vec<Arc<dyn Connection>> {
        self.connections.read().await.values().cloned().collect()
    }

    pub async fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.read().await.contains_key(id)
    }

    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.read().await.is_empty()
    }
}
