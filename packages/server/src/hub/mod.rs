//! The relay core: who is connected, what was said, and who hears it.

mod broadcast;
mod registry;

pub use broadcast::{BroadcastHub, DEFAULT_DELIVERY_TIMEOUT, FanOutReport};
pub use registry::ConnectionRegistry;
