//! WebSocket frame DTOs.
//!
//! Outbound chat frames are the serialized `ChatMessage` itself and inbound
//! frames are parsed by `MessageBody::from_frame`; only the error reply
//! needs its own type.

use serde::Serialize;

/// Reply sent only to the submitter when its frame is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorFrame {
    pub error: String,
}

impl ErrorFrame {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
