//! Shared application state.

use std::sync::Arc;

use crate::hub::BroadcastHub;

/// State handed to every handler.
pub struct AppState {
    /// The one hub owning history and connections
    pub hub: Arc<BroadcastHub>,
}
