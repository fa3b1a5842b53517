//! Mock block source for testing.
//!
//! Provides [`MockSource`] for unit testing without network access.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::auth::ApiToken;
use crate::error::NotionError;
use crate::source::BlockSource;
use crate::types::PageResult;

/// Mock block source for testing.
///
/// Serves pages from memory and counts every fetch, so tests can assert that
/// no outbound call happened.
///
/// # Example
///
/// ```ignore
/// use ndocs_notion::{MockSource, PageResult};
///
/// let source = MockSource::new().with_page("abc", PageResult::default());
/// assert_eq!(source.calls(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    pages: HashMap<String, PageResult>,
    calls: AtomicUsize,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page result for an identifier.
    #[must_use]
    pub fn with_page(mut self, page_id: impl Into<String>, page: PageResult) -> Self {
        self.pages.insert(page_id.into(), page);
        self
    }

    /// Number of fetches performed so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BlockSource for MockSource {
    fn fetch(&self, page_id: &str, _token: &ApiToken) -> Result<PageResult, NotionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if page_id.is_empty() {
            return Err(NotionError::InvalidPageId(page_id.to_owned()));
        }
        self.pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| NotionError::HttpResponse {
                status: 404,
                body: format!(r#"{{"object":"error","code":"object_not_found","id":"{page_id}"}}"#),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Block, BlockKind, TextRun};

    #[test]
    fn test_mock_serves_page_and_counts() {
        let page = PageResult::from_blocks(
            vec![Block::new(
                "b1",
                BlockKind::Paragraph,
                vec![TextRun::plain("hi")],
            )],
            "req",
        );
        let source = MockSource::new().with_page("p1", page.clone());
        let token = ApiToken::new("t").unwrap();

        assert_eq!(source.fetch("p1", &token).unwrap(), page);
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_mock_unknown_page_is_404() {
        let source = MockSource::new();
        let token = ApiToken::new("t").unwrap();
        let err = source.fetch("missing", &token).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(source.calls(), 1);
    }
}
