//! Domain layer.
//!
//! Value objects of the relay (`ChatMessage`, `HistoryBuffer`, ...) and the
//! traits the hub depends on. Concrete implementations of those traits live
//! in the infrastructure layer.

mod connection;
mod error;
mod history;
mod message;
mod renderer;

#[cfg(test)]
pub use connection::MockConnection;
pub use connection::{Connection, ConnectionId};
pub use error::{DeliveryError, MessageBodyError, SubmitError};
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryBuffer};
pub use message::{ChatMessage, MessageBody, MessageId};
pub use renderer::MessageRenderer;
