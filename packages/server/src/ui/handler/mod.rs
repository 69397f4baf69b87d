//! Request handlers.

mod http;
mod page;
mod websocket;

pub use http::{health_check, list_messages};
pub use page::index;
pub use websocket::websocket_handler;
