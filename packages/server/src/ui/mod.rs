//! Transport layer: axum routes for the page, the live channel and the API.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
