//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use ndocs_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site for catalog listing and page rendering.
    pub(crate) site: Arc<Site>,
}
