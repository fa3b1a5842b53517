//! Block children list response.

use serde::Deserialize;

use super::{Block, null_as_default};

/// Response of `GET /blocks/{id}/children`.
///
/// Only one page of results is ever read. `has_more` and `next_cursor` are
/// kept for inspection but never followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageResult {
    /// Object type (always "list").
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    /// Child blocks in document order.
    #[serde(default)]
    pub results: Option<Vec<Block>>,
    /// Cursor for the next page of results.
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Whether more results exist beyond this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
    /// Request correlation ID assigned by Notion.
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: String,
}

impl PageResult {
    /// Create a single-page result from blocks.
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>, request_id: impl Into<String>) -> Self {
        Self {
            object: "list".to_owned(),
            results: Some(blocks),
            next_cursor: None,
            has_more: false,
            request_id: request_id.into(),
        }
    }

    /// Blocks of the page, empty when the result list is absent.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.results.as_deref().unwrap_or_default()
    }
}
