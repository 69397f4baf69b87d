//! Error types of the relay core.

use std::time::Duration;

use thiserror::Error;

/// Errors raised when constructing a `MessageBody`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageBodyError {
    #[error("message body must not be empty")]
    Empty,
}

/// Rejections returned by `BroadcastHub::submit`.
///
/// Apart from `Interrupted`, none of these mutate history or trigger a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The frame is not JSON, or has no string `body` field
    #[error("malformed frame: {0}")]
    Malformed(String),

    #[error("message body must not be empty")]
    EmptyBody,

    /// The outbound payload could not be encoded
    #[error("failed to encode message: {0}")]
    Encode(String),

    /// The broadcast task panicked or was shut down with the runtime
    #[error("broadcast interrupted: {0}")]
    Interrupted(String),
}

impl From<MessageBodyError> for SubmitError {
    fn from(err: MessageBodyError) -> Self {
        match err {
            MessageBodyError::Empty => SubmitError::EmptyBody,
        }
    }
}

/// Failure to deliver a payload to a single connection.
///
/// Always handled inside the fan-out loop; never reaches the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("connection is closed")]
    Closed,

    #[error("send failed: {0}")]
    SendFailed(String),

    #[error("delivery timed out after {0:?}")]
    TimedOut(Duration),
}
