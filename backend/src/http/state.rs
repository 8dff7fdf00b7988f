//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dashboard::DashboardContext;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded table, layout and bindings; read-only after startup
    pub context: Arc<DashboardContext>,
}

impl AppState {
    /// Create a new application state around a loaded dashboard.
    pub fn new(context: Arc<DashboardContext>) -> Self {
        Self { context }
    }
}
