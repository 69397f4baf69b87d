//! WebSocket-backed `Connection`.
//!
//! The UI layer owns the socket itself. This handle only holds the sending
//! half of an unbounded channel whose receiver is drained into the socket
//! by the connection's pusher loop, so `send` never waits on the network.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{Connection, ConnectionId, DeliveryError};

/// Sending half of a client's outbound queue.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Connection handle registered with the hub for one WebSocket client.
#[derive(Debug, Clone)]
pub struct WebSocketConnection {
    id: ConnectionId,
    sender: PusherChannel,
}

impl WebSocketConnection {
    /// Wrap `sender` under a freshly generated identity.
    pub fn new(sender: PusherChannel) -> Self {
        Self {
            id: ConnectionId::generate(),
            sender,
        }
    }
}

#[async_trait]
impl Connection for WebSocketConnection {
    fn id(&self) -> ConnectionId {
        self.id
    }

    async fn send(&self, payload: &str) -> Result<(), DeliveryError> {
        if self.sender.is_closed() {
            return Err(DeliveryError::Closed);
        }
        self.sender
            .send(payload.to_string())
            .map_err(|e| DeliveryError::SendFailed(e.to_string()))
    }

    fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
