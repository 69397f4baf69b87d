//! Chat message value objects.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MessageBodyError, SubmitError};

/// Unique identifier minted for every submitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw message text as submitted by a client.
///
/// Untrusted: it must be escaped by whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageBody(String);

impl MessageBody {
    /// Create a body, rejecting the empty string.
    pub fn new(body: String) -> Result<Self, MessageBodyError> {
        if body.is_empty() {
            return Err(MessageBodyError::Empty);
        }
        Ok(Self(body))
    }

    /// Extract the body from a submitted frame `{"body": "<text>"}`.
    ///
    /// Unknown fields are ignored. A missing or non-string `body` is malformed.
    pub fn from_frame(raw: &str) -> Result<Self, SubmitError> {
        let frame: InboundFrame =
            serde_json::from_str(raw).map_err(|e| SubmitError::Malformed(e.to_string()))?;
        Ok(Self::new(frame.body)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
struct InboundFrame {
    body: String,
}

impl TryFrom<String> for MessageBody {
    type Error = MessageBodyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A submitted message together with its rendered fragment.
///
/// Immutable once created. Serializes to the outbound wire object
/// `{"id": ..., "body": ..., "html": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    id: MessageId,
    body: MessageBody,
    html: String,
}

impl ChatMessage {
    pub fn new(id: MessageId, body: MessageBody, html: String) -> Self {
        Self { id, body, html }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Pre-rendered fragment produced once at submission time.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Encode the outbound wire payload.
    pub fn to_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
