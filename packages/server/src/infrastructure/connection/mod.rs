//! `Connection` implementations.
//!
//! - `websocket`: channel-backed handle drained into a WebSocket sink

pub mod websocket;

pub use websocket::{PusherChannel, WebSocketConnection};
