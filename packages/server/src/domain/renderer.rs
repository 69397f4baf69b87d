//! Rendering seam.

use super::{MessageBody, MessageId};

/// Turns a message into the fragment clients display.
///
/// Called exactly once per message, at submission time. Implementations
/// must be pure: same input, same output, no side effects.
pub trait MessageRenderer: Send + Sync {
    fn render(&self, id: &MessageId, body: &MessageBody) -> String;
}
