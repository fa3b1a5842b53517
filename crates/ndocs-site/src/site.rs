//! Unified site: catalog, credential gate, fetch and render.

use std::sync::Arc;

use ndocs_notion::{ApiToken, BlockSource, NotionError, TokenSource};
use ndocs_renderer::{RenderedNode, render, to_html};
use tracing::info;

use crate::template::{DocumentData, render_catalog_list, render_document};

/// Error returned when page rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No credential available; nothing was fetched.
    #[error("Notion credential not configured ({0})")]
    MissingCredential(String),
    /// Fetch from Notion failed.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] NotionError),
}

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Document title of every page.
    pub title: String,
    /// Meta description of every page.
    pub description: String,
    /// Catalog of page IDs, in listing order.
    pub catalog: Vec<String>,
}

/// Result of rendering one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRenderResult {
    /// Requested page ID.
    pub page_id: String,
    /// Notion request ID of the fetch.
    pub request_id: String,
    /// Whether Notion reported more blocks than were read.
    pub has_more: bool,
    /// Rendered block tree.
    pub nodes: Vec<RenderedNode>,
    /// HTML fragment of `nodes`.
    pub html: String,
}

/// Static route parameter for one catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticParam {
    /// Notion page ID.
    pub notion_page_id: String,
}

/// Documentation site backed by a block source.
///
/// Holds only immutable data, so one instance is shared across all requests.
pub struct Site {
    source: Arc<dyn BlockSource>,
    tokens: TokenSource,
    title: String,
    description: String,
    catalog: Arc<[String]>,
}

impl Site {
    /// Create a site.
    pub fn new(source: Arc<dyn BlockSource>, tokens: TokenSource, config: SiteConfig) -> Self {
        Self {
            source,
            tokens,
            title: config.title,
            description: config.description,
            catalog: config.catalog.into(),
        }
    }

    /// Catalog page IDs.
    #[must_use]
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Static route parameters, one per catalog page.
    #[must_use]
    pub fn static_params(&self) -> Vec<StaticParam> {
        self.catalog
            .iter()
            .map(|id| StaticParam {
                notion_page_id: id.clone(),
            })
            .collect()
    }

    /// Resolve the credential, or fail before any fetch.
    fn token(&self) -> Result<ApiToken, SiteError> {
        self.tokens
            .resolve()
            .ok_or_else(|| SiteError::MissingCredential(self.tokens.describe()))
    }

    /// Fetch and render a page.
    ///
    /// The ID does not have to be in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingCredential`] without fetching when no
    /// credential is available, or [`SiteError::Fetch`] if the fetch fails.
    pub fn render(&self, page_id: &str) -> Result<PageRenderResult, SiteError> {
        let token = self.token()?;
        let page = self.source.fetch(page_id, &token)?;

        let nodes = render(page.results.as_deref());
        let html = to_html(&nodes);
        info!(
            page_id,
            request_id = %page.request_id,
            nodes = nodes.len(),
            "Rendered page"
        );

        Ok(PageRenderResult {
            page_id: page_id.to_owned(),
            request_id: page.request_id,
            has_more: page.has_more,
            nodes,
            html,
        })
    }

    /// Fetch and render a page as a complete HTML document.
    ///
    /// # Errors
    ///
    /// Same as [`render`](Self::render).
    pub fn render_document(&self, page_id: &str) -> Result<String, SiteError> {
        let result = self.render(page_id)?;
        Ok(self.wrap(&result.html))
    }

    /// Render the catalog index as a complete HTML document.
    ///
    /// Gated on the credential like page views, but never fetches.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingCredential`] when no credential is available.
    pub fn render_index(&self) -> Result<String, SiteError> {
        self.token()?;
        Ok(self.wrap(&render_catalog_list(&self.catalog)))
    }

    /// Wrap a body fragment in the document shell.
    fn wrap(&self, body_html: &str) -> String {
        render_document(&DocumentData {
            title: &self.title,
            description: &self.description,
            body_html,
        })
    }
}

#[cfg(test)]
mod tests {
    use ndocs_notion::{Block, BlockKind, MockSource, PageResult, TextRun};
    use ndocs_renderer::NodeKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            title: "Docs".to_owned(),
            description: "Test docs".to_owned(),
            catalog: vec!["p1".to_owned(), "p2".to_owned()],
        }
    }

    fn sample_page() -> PageResult {
        PageResult::from_blocks(
            vec![
                Block::new("h", BlockKind::Heading1, vec![TextRun::plain("Title")]),
                Block::new(
                    "p",
                    BlockKind::Paragraph,
                    vec![TextRun::plain("Hello "), TextRun::plain("world").bold()],
                ),
                Block::new("u", BlockKind::Unsupported("unknown_kind".to_owned()), vec![]),
            ],
            "req-1",
        )
    }

    fn site_with(source: &Arc<MockSource>, token: Option<&str>) -> Site {
        Site::new(
            Arc::clone(source) as Arc<dyn BlockSource>,
            TokenSource::Fixed(token.and_then(ApiToken::new)),
            config(),
        )
    }

    #[test]
    fn test_render_page() {
        let source = Arc::new(MockSource::new().with_page("p1", sample_page()));
        let site = site_with(&source, Some("secret"));

        let result = site.render("p1").unwrap();

        assert_eq!(result.request_id, "req-1");
        assert_eq!(result.nodes.len(), 2);
        assert_eq!(result.nodes[0].kind, NodeKind::Heading { level: 1 });
        assert_eq!(
            result.html,
            r#"<h1 data-block-id="h">Title</h1><p data-block-id="p">Hello <strong>world</strong></p>"#
        );
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_missing_credential_does_not_fetch() {
        let source = Arc::new(MockSource::new().with_page("p1", sample_page()));
        let site = site_with(&source, None);

        for id in site.catalog().to_vec() {
            let err = site.render(&id).unwrap_err();
            assert!(matches!(err, SiteError::MissingCredential(_)));
        }
        assert!(matches!(
            site.render_index(),
            Err(SiteError::MissingCredential(_))
        ));
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_page_outside_catalog_is_forwarded() {
        let source = Arc::new(MockSource::new().with_page("other", sample_page()));
        let site = site_with(&source, Some("secret"));

        site.render("other").unwrap();
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_fetch_error_propagates() {
        let source = Arc::new(MockSource::new());
        let site = site_with(&source, Some("secret"));

        let err = site.render("p1").unwrap_err();
        match err {
            SiteError::Fetch(e) => assert_eq!(e.status(), Some(404)),
            SiteError::MissingCredential(_) => panic!("expected fetch error"),
        }
    }

    #[test]
    fn test_missing_results_renders_empty() {
        let source = Arc::new(MockSource::new().with_page("p1", PageResult::default()));
        let site = site_with(&source, Some("secret"));

        let result = site.render("p1").unwrap();
        assert!(result.nodes.is_empty());
        assert_eq!(result.html, "");
    }

    #[test]
    fn test_render_document_wraps_page() {
        let source = Arc::new(MockSource::new().with_page("p1", sample_page()));
        let site = site_with(&source, Some("secret"));

        let html = site.render_document("p1").unwrap();
        assert!(html.contains("<title>Docs</title>"));
        assert!(html.contains(r#"<h1 data-block-id="h">Title</h1>"#));
    }

    #[test]
    fn test_render_index_lists_catalog() {
        let source = Arc::new(MockSource::new());
        let site = site_with(&source, Some("secret"));

        let html = site.render_index().unwrap();
        assert!(html.contains(r#"<a href="/assistant/p1">p1</a>"#));
        assert!(html.contains(r#"<a href="/assistant/p2">p2</a>"#));
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_static_params() {
        let source = Arc::new(MockSource::new());
        let site = site_with(&source, None);

        assert_eq!(
            site.static_params(),
            vec![
                StaticParam {
                    notion_page_id: "p1".to_owned()
                },
                StaticParam {
                    notion_page_id: "p2".to_owned()
                },
            ]
        );
    }
}
