//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod catalog;
pub(crate) mod render;
pub(crate) mod serve;

use std::sync::Arc;

use ndocs_config::Config;
use ndocs_notion::{NotionClient, TokenSource};
use ndocs_site::{Site, SiteConfig};

pub(crate) use build::BuildArgs;
pub(crate) use catalog::CatalogArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

/// Create a site that fetches from the configured Notion API.
pub(crate) fn site_from_config(config: &Config) -> Site {
    Site::new(
        Arc::new(NotionClient::new(
            &config.notion.base_url,
            &config.notion.version,
        )),
        TokenSource::Env(config.notion.api_key_env.clone()),
        SiteConfig {
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            catalog: config.catalog.pages.clone(),
        },
    )
}
