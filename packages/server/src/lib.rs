//! Real-time chat relay.
//!
//! Clients attach over WebSocket, submit short messages, and receive every
//! message submitted by anyone, preceded by a bounded history replay.

// layers
pub mod domain;
pub mod hub;
pub mod infrastructure;
pub mod ui;

pub mod config;
