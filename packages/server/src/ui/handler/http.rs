//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{domain::ChatMessage, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current history, oldest first
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<Vec<ChatMessage>> {
    Json(state.hub.history_for_replay().await)
}
