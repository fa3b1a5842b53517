//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ndocs_notion::NotionError;
use ndocs_site::SiteError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Page not available (no credential configured).
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Fetch from Notion failed.
    #[error("Fetch failed for {path}: {source}")]
    Fetch {
        /// Request path.
        path: String,
        /// Underlying error.
        source: NotionError,
    },

    /// Blocking render task failed.
    #[error("Render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ServerError {
    /// Map a site error for the given request path.
    pub(crate) fn from_site(err: SiteError, path: &str) -> Self {
        match err {
            SiteError::MissingCredential(_) => Self::PageNotFound(path.to_owned()),
            SiteError::Fetch(source) => Self::Fetch {
                path: path.to_owned(),
                source,
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::Fetch { path, source } => {
                tracing::warn!(path = %path, error = %source, "Page fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({"error": source.to_string(), "path": path}),
                )
            }
            Self::Join(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
