//! Broadcast hub: message history and fan-out.
//!
//! ## Test notes
//!
//! ### What is tested
//! - `submit`: parse, render, record, fan out
//! - `fan_out`: per-connection failure isolation (closed, erroring, stalled)
//! - `history_for_replay` / `attach`: ordering and replay consistency
//!
//! ### Why
//! - Every accepted message must be recorded once and reach every
//!   connection registered at that moment, even if the submitting client
//!   disconnects while its message is in flight
//! - A single broken client must never hold up or hide messages from others
//!
//! ### Scenarios
//! - Happy path: two clients, one leaves, the other keeps receiving
//! - Failures: closed channel, erroring send, send that never completes
//! - Races: submitter cancelled mid-delivery, attach during concurrent submits
//! - Edge cases: malformed frames, empty bodies, history overflow

use std::{sync::Arc, time::Duration};

use futures_util::future::join_all;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, Connection, ConnectionId, DeliveryError, HistoryBuffer, MessageBody, MessageId,
    MessageRenderer, SubmitError,
};

use super::ConnectionRegistry;

/// Upper bound on a single delivery before it is given up on.
pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of delivering one payload to a registry snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutReport {
    pub recipients: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Owns the message history and delivers every accepted message to all
/// registered connections.
///
/// Lock order is history, then registry. `submit` appends and snapshots the
/// registry under the history lock, and `attach` registers and snapshots the
/// history under the same lock, so a new connection sees each message either
/// in its replay or live, never both and never neither.
pub struct BroadcastHub {
    registry: Arc<ConnectionRegistry>,
    history: Arc<Mutex<HistoryBuffer>>,
    renderer: Arc<dyn MessageRenderer>,
    delivery_timeout: Duration,
}

impl BroadcastHub {
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        renderer: Arc<dyn MessageRenderer>,
        history_capacity: usize,
        delivery_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            history: Arc::new(Mutex::new(HistoryBuffer::new(history_capacity))),
            renderer,
            delivery_timeout,
        }
    }

    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }

    /// Register a new connection and return the history it should replay.
    pub async fn attach(&self, connection: Arc<dyn Connection>) -> Vec<ChatMessage> {
        let history = self.history.lock().await;
        self.registry.register(connection).await;
        history.snapshot()
    }

    /// Unregister a connection on close. Safe to call more than once.
    pub async fn detach(&self, id: &ConnectionId) -> bool {
        self.registry.unregister(id).await
    }

    /// Accept a raw frame from a client, record it, and broadcast it.
    ///
    /// Recording and delivery run on their own task. Dropping the returned
    /// future after the frame was accepted does not stop the broadcast.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the frame is malformed or the body is empty.
    /// History and connections are untouched in that case.
    pub async fn submit(&self, raw: &str) -> Result<ChatMessage, SubmitError> {
        // 1. Validate and render once
        let body = MessageBody::from_frame(raw)?;
        let id = MessageId::generate();
        let html = self.renderer.render(&id, &body);
        let message = ChatMessage::new(id, body, html);
        let payload = message
            .to_payload()
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        // 2. Record and fan out, detached from the caller
        let registry = self.registry.clone();
        let history = self.history.clone();
        let delivery_timeout = self.delivery_timeout;
        let recorded = message.clone();
        let broadcast = tokio::spawn(async move {
            let recipients = {
                let mut history = history.lock().await;
                let evicted = history.push(recorded.clone());
                if evicted > 0 {
                    tracing::info!(
                        "History full (capacity {}), evicted {} messages before '{}'",
                        history.capacity(),
                        evicted,
                        recorded.id()
                    );
                }
                registry.snapshot().await
            };

            let report = deliver_to(&recipients, &payload, delivery_timeout).await;
            tracing::info!(
                "Message '{}' delivered to {}/{} connections",
                recorded.id(),
                report.delivered,
                report.recipients
            );
        });

        // 3. Wait so callers observe submission order
        broadcast
            .await
            .map_err(|e| SubmitError::Interrupted(e.to_string()))?;

        Ok(message)
    }

    /// Deliver an already recorded message to every registered connection.
    ///
    /// Per-connection failures are logged and counted, never returned, and
    /// never cause a connection to be unregistered.
    pub async fn fan_out(&self, message: &ChatMessage) -> FanOutReport {
        let payload = match message.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to encode message '{}': {}", message.id(), e);
                return FanOutReport::default();
            }
        };
        let recipients = self.registry.snapshot().await;
        deliver_to(&recipients, &payload, self.delivery_timeout).await
    }

    /// Current history, oldest first.
    pub async fn history_for_replay(&self) -> Vec<ChatMessage> {
        self.history.lock().await.snapshot()
    }
}

async fn deliver_to(
    recipients: &[Arc<dyn Connection>],
    payload: &str,
    delivery_timeout: Duration,
) -> FanOutReport {
    tracing::debug!("Sending message to {} connections", recipients.len());

    let results = join_all(
        recipients
            .iter()
            .map(|connection| deliver_one(connection.as_ref(), payload, delivery_timeout)),
    )
    .await;

    let failed = results.iter().filter(|result| result.is_err()).count();
    FanOutReport {
        recipients: recipients.len(),
        delivered: recipients.len() - failed,
        failed,
    }
}

async fn deliver_one(
    connection: &dyn Connection,
    payload: &str,
    delivery_timeout: Duration,
) -> Result<(), DeliveryError> {
    let id = connection.id();
    let result = if connection.is_closed() {
        Err(DeliveryError::Closed)
    } else {
        match tokio::time::timeout(delivery_timeout, connection.send(payload)).await {
            Ok(result) => result,
            Err(_) => Err(DeliveryError::TimedOut(delivery_timeout)),
        }
    };

    match &result {
        Ok(()) => tracing::debug!("Delivered message to connection '{}'", id),
        Err(e) => tracing::warn!("Failed to deliver message to connection '{}': {}", id, e),
    }
    result
}
