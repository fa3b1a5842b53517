//! Notion REST API client.
//!
//! Provides a sync HTTP client for the Notion public API authenticated with an
//! integration bearer token.

mod blocks;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use ureq::Agent;

/// Characters left as-is in a path segment: A-Z a-z 0-9 - . _ ~
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Default Notion API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion API version sent in the `Notion-Version` header.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Notion REST API client.
///
/// No global timeout is configured; requests rely on the transport defaults.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    notion_version: String,
}

impl NotionClient {
    /// Create a client.
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g. `https://api.notion.com/v1`)
    /// * `notion_version` - value of the `Notion-Version` header
    #[must_use]
    pub fn new(base_url: &str, notion_version: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            notion_version: notion_version.to_owned(),
        }
    }

    /// Get the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the children endpoint for a block or page.
    ///
    /// The ID is encoded as one path segment, so `/`, `?` and `#` in it
    /// cannot reach another endpoint.
    fn children_url(&self, block_id: &str) -> String {
        format!(
            "{}/blocks/{}/children",
            self.base_url,
            utf8_percent_encode(block_id, SEGMENT_ENCODE_SET)
        )
    }
}

impl Default for NotionClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = NotionClient::new("https://api.notion.com/v1/", DEFAULT_NOTION_VERSION);
        assert_eq!(client.base_url(), "https://api.notion.com/v1");
    }

    #[test]
    fn test_children_url() {
        let client = NotionClient::default();
        assert_eq!(
            client.children_url("6f09a80ccaa54bcb87fbbd22c3771de1"),
            "https://api.notion.com/v1/blocks/6f09a80ccaa54bcb87fbbd22c3771de1/children"
        );
    }

    #[test]
    fn test_children_url_encodes_id_as_one_segment() {
        let client = NotionClient::default();
        assert_eq!(
            client.children_url("x/../../users?q=#frag"),
            "https://api.notion.com/v1/blocks/x%2F..%2F..%2Fusers%3Fq%3D%23frag/children"
        );
        assert_eq!(
            client.children_url("6f09a80c-caa5-4bcb-87fb-bd22c3771de1"),
            "https://api.notion.com/v1/blocks/6f09a80c-caa5-4bcb-87fb-bd22c3771de1/children"
        );
    }
}
