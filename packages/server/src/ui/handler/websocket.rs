//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{ChatMessage, Connection},
    hub::BroadcastHub,
    infrastructure::{
        connection::{PusherChannel, WebSocketConnection},
        dto::websocket::ErrorFrame,
    },
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the connection's outbound queue into the socket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Write the replayed history straight to the socket.
///
/// Live messages queue up in the channel meanwhile and are only drained
/// afterwards, so replay always comes first.
async fn replay_history(
    sender: &mut SplitSink<WebSocket, Message>,
    history: &[ChatMessage],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    for message in history {
        let payload = message.to_payload()?;
        sender.send(Message::Text(payload.into())).await?;
    }
    Ok(())
}

/// Handle one text frame from the client.
async fn on_text(hub: &BroadcastHub, reply: &PusherChannel, text: &str) {
    tracing::info!("Got message {:?}", text);

    match hub.submit(text).await {
        Ok(message) => tracing::debug!("Accepted message '{}'", message.id()),
        Err(e) => {
            tracing::warn!("Rejected message: {}", e);
            reject(reply, &e.to_string());
        }
    }
}

/// Send an error frame to the submitter only.
fn reject(reply: &PusherChannel, error: &str) {
    match serde_json::to_string(&ErrorFrame::new(error)) {
        Ok(json) => {
            if reply.send(json).is_err() {
                tracing::debug!("Submitter went away before the rejection was sent");
            }
        }
        Err(e) => tracing::error!("Failed to encode error frame: {}", e),
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let connection = Arc::new(WebSocketConnection::new(tx.clone()));
    let connection_id = connection.id();

    let history = state.hub.attach(connection).await;
    tracing::info!(
        "Connection '{}' opened, replaying {} messages",
        connection_id,
        history.len()
    );

    let (mut sender, mut receiver) = socket.split();

    if let Err(e) = replay_history(&mut sender, &history).await {
        tracing::error!("Failed to replay history to '{}': {}", connection_id, e);
        state.hub.detach(&connection_id).await;
        return;
    }

    let hub = state.hub.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => on_text(&hub, &tx, text.as_str()).await,
                Message::Binary(_) => {
                    tracing::warn!("Binary frame from '{}' ignored", connection_id);
                    reject(&tx, "binary frames are not supported");
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled by axum
                _ => {}
            }
        }
    });

    // Spawn a task to push queued payloads to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.hub.detach(&connection_id).await;
    tracing::info!("Connection '{}' closed", connection_id);
}
