//! Infrastructure layer: concrete implementations of the domain seams and
//! the wire formats spoken by the transport.

pub mod connection;
pub mod dto;
pub mod renderer;
