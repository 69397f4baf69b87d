//! `MessageRenderer` implementations.

pub mod html;

pub use html::HtmlMessageRenderer;
