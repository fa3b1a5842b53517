//! `ndocs render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use ndocs_config::{CliSettings, Config};
use ndocs_renderer::RenderedNode;
use ndocs_site::Site;
use serde::Serialize;

use super::site_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Output format of the render command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// HTML fragment.
    #[default]
    Html,
    /// Rendered node tree as JSON.
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Notion page ID (need not be in the catalog).
    page_id: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    /// Path to configuration file (default: auto-discover ndocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// JSON document written by `--format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderOutput<'a> {
    page_id: &'a str,
    request_id: &'a str,
    has_more: bool,
    nodes: &'a [RenderedNode],
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), Some(&CliSettings::default()))?;
        let site = site_from_config(&config);

        let rendered = render_page(&site, &self.page_id, self.format)?;
        output.data(&rendered)?;
        Ok(())
    }
}

/// Fetch a page and format it for stdout.
fn render_page(site: &Site, page_id: &str, format: Format) -> Result<String, CliError> {
    let result = site.render(page_id)?;
    if result.has_more {
        tracing::warn!(page_id, "Page has more blocks than the first batch");
    }

    match format {
        Format::Html => Ok(result.html),
        Format::Json => Ok(serde_json::to_string_pretty(&RenderOutput {
            page_id: &result.page_id,
            request_id: &result.request_id,
            has_more: result.has_more,
            nodes: &result.nodes,
        })?),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ndocs_notion::{
        ApiToken, Block, BlockKind, BlockSource, MockSource, PageResult, TextRun, TokenSource,
    };
    use ndocs_site::{SiteConfig, SiteError};
    use pretty_assertions::assert_eq;

    use super::*;

    fn site(token: Option<&str>) -> (Site, Arc<MockSource>) {
        let page = PageResult::from_blocks(
            vec![Block::new(
                "b1",
                BlockKind::Code,
                vec![TextRun::plain("let x = 1 < 2;")],
            )],
            "req-7",
        );
        let source = Arc::new(MockSource::new().with_page("p1", page));
        let site = Site::new(
            Arc::clone(&source) as Arc<dyn BlockSource>,
            TokenSource::Fixed(token.and_then(ApiToken::new)),
            SiteConfig {
                title: "Docs".to_owned(),
                description: "Docs".to_owned(),
                catalog: vec!["p1".to_owned()],
            },
        );
        (site, source)
    }

    #[test]
    fn test_render_html() {
        let (site, _) = site(Some("secret"));

        let html = render_page(&site, "p1", Format::Html).unwrap();

        assert_eq!(html, r#"<pre data-block-id="b1">let x = 1 &lt; 2;</pre>"#);
    }

    #[test]
    fn test_render_json() {
        let (site, _) = site(Some("secret"));

        let json = render_page(&site, "p1", Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["pageId"], "p1");
        assert_eq!(value["requestId"], "req-7");
        assert_eq!(value["nodes"][0]["kind"]["type"], "preformatted");
        assert_eq!(value["nodes"][0]["children"][0]["text"], "let x = 1 < 2;");
    }

    #[test]
    fn test_render_without_credential_fails_before_fetch() {
        let (site, source) = site(None);

        let err = render_page(&site, "p1", Format::Html).unwrap_err();

        assert!(matches!(
            err,
            CliError::Site(SiteError::MissingCredential(_))
        ));
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_render_fetch_failure() {
        let (site, _) = site(Some("secret"));

        let err = render_page(&site, "missing", Format::Html).unwrap_err();

        assert!(matches!(err, CliError::Site(SiteError::Fetch(_))));
    }
}
