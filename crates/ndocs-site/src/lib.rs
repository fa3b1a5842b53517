//! Page catalog and page rendering for ndocs.
//!
//! This crate provides [`Site`], which ties a [`BlockSource`](ndocs_notion::BlockSource),
//! the credential lookup and the block renderer together. Both the HTTP server
//! and the CLI render through it.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use ndocs_notion::{NotionClient, TokenSource};
//! use ndocs_site::{Site, SiteConfig};
//!
//! let site = Site::new(
//!     Arc::new(NotionClient::default()),
//!     TokenSource::Env("NOTION_API_KEY".to_owned()),
//!     SiteConfig {
//!         title: "Documentation".to_owned(),
//!         description: "Documentation".to_owned(),
//!         catalog: vec!["6f09a80ccaa54bcb87fbbd22c3771de1".to_owned()],
//!     },
//! );
//!
//! let result = site.render("6f09a80ccaa54bcb87fbbd22c3771de1")?;
//! println!("{}", result.html);
//! # Ok(())
//! # }
//! ```

mod site;
mod template;

pub use site::{PageRenderResult, Site, SiteConfig, SiteError, StaticParam};

/// URL path of a page view.
#[must_use]
pub fn page_path(page_id: &str) -> String {
    format!("/assistant/{page_id}")
}
