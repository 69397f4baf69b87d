//! Connection handle and its identity.

use std::fmt;

use async_trait::async_trait;
use uuid::Uuid;

use super::DeliveryError;

/// Identity of one live client channel.
///
/// Registry membership is keyed by this value, never by the address of the
/// handle behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Mint a fresh random identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One client's outbound channel.
///
/// The transport creates a connection when a client attaches and drops it
/// once the registry has let go of it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Connection: Send + Sync {
    /// Identity used for registry membership.
    fn id(&self) -> ConnectionId;

    /// Push one framed payload to the client.
    async fn send(&self, payload: &str) -> Result<(), DeliveryError>;

    /// Whether the underlying channel has already gone away.
    fn is_closed(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();

        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_hyphenated_uuid() {
        let id = ConnectionId::generate();

        assert_eq!(Uuid::parse_str(&id.to_string()).ok().map(ConnectionId), Some(id));
    }
}
