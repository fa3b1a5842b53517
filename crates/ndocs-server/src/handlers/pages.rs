//! Page endpoints.
//!
//! `GET /assistant/{page_id}` returns the rendered page as an HTML document,
//! `GET /api/pages/{page_id}` returns the rendered block tree as JSON.
//! Fetch and render run on the blocking pool since the Notion client is sync.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use ndocs_renderer::RenderedNode;
use ndocs_site::{PageRenderResult, page_path};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{page_id}.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageResponse {
    /// Notion page ID.
    page_id: String,
    /// Notion request ID of the fetch.
    request_id: String,
    /// Whether Notion reported more blocks than were rendered.
    has_more: bool,
    /// Rendered block tree.
    nodes: Vec<RenderedNode>,
}

impl From<PageRenderResult> for PageResponse {
    fn from(result: PageRenderResult) -> Self {
        Self {
            page_id: result.page_id,
            request_id: result.request_id,
            has_more: result.has_more,
            nodes: result.nodes,
        }
    }
}

/// Handle GET /assistant/{page_id}.
pub(crate) async fn get_page_view(
    Path(page_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let path = page_path(&page_id);
    let site = Arc::clone(&state.site);
    tokio::task::spawn_blocking(move || site.render_document(&page_id))
        .await?
        .map(Html)
        .map_err(|e| ServerError::from_site(e, &path))
}

/// Handle GET /api/pages/{page_id}.
pub(crate) async fn get_page(
    Path(page_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, ServerError> {
    let path = format!("/api/pages/{page_id}");
    let site = Arc::clone(&state.site);
    tokio::task::spawn_blocking(move || site.render(&page_id))
        .await?
        .map(|result| Json(PageResponse::from(result)))
        .map_err(|e| ServerError::from_site(e, &path))
}
