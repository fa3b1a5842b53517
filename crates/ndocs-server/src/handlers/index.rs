//! Catalog index page.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET / (HTML list of catalog pages).
pub(crate) async fn get_index(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    state
        .site
        .render_index()
        .map(Html)
        .map_err(|e| ServerError::from_site(e, "/"))
}
