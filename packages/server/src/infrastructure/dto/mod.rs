//! Data Transfer Objects exchanged over the live channel.

pub mod websocket;
