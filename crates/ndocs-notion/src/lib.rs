//! Notion integration for ndocs.
//!
//! This crate provides everything needed to read page content from Notion:
//! - [`NotionClient`]: blocking REST client for the block children endpoint
//! - [`BlockSource`]: the fetch seam used by the site layer
//! - [`ApiToken`] / [`TokenSource`]: the bearer credential and where it comes from
//! - [`PageResult`], [`Block`], [`TextRun`]: the response model
//! - [`MockSource`]: in-memory source for tests (behind the `mock` feature)
//!
//! # Example
//!
//! ```ignore
//! use ndocs_notion::{ApiToken, BlockSource, NotionClient};
//!
//! let client = NotionClient::new("https://api.notion.com/v1", "2022-06-28");
//! let token = ApiToken::from_env("NOTION_API_KEY").expect("token");
//! let page = client.fetch("6f09a80ccaa54bcb87fbbd22c3771de1", &token)?;
//! println!("{} blocks", page.blocks().len());
//! ```

mod auth;
mod client;
pub mod error;
#[cfg(feature = "mock")]
mod mock;
mod source;
mod types;

pub use auth::{ApiToken, TokenSource};
pub use client::{DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, NotionClient};
pub use error::NotionError;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::BlockSource;
pub use types::{
    Annotations, Block, BlockContent, BlockKind, Link, PageResult, TextContent, TextRun,
};
