//! Bounded message history.

use super::ChatMessage;

/// Number of messages kept for replay unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

/// Insertion-ordered buffer of recent messages.
///
/// The length never exceeds the capacity. Overflow is handled in bulk:
/// inserting into a full buffer clears it first, so the triggering message
/// becomes the only entry. This is not a sliding window.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    messages: Vec<ChatMessage>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a message, returning how many entries were evicted to make room.
    pub fn push(&mut self, message: ChatMessage) -> usize {
        let mut evicted = 0;
        if self.messages.len() >= self.capacity {
            evicted = self.messages.len();
            self.messages.clear();
        }
        self.messages.push(message);
        evicted
    }

    /// Owned copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
