//! Error types for Notion integration.

/// Error from Notion API operations.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed (network error, TLS, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (service returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body is not valid JSON for a block list.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Page identifier was empty or a dot segment.
    #[error("invalid page id: {0:?}")]
    InvalidPageId(String),
}

impl NotionError {
    /// HTTP status returned by the service, if the request got that far.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}
