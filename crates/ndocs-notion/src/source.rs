//! Block source trait.

use crate::auth::ApiToken;
use crate::error::NotionError;
use crate::types::PageResult;

/// Fetches the content blocks of a page.
///
/// Implementations perform a single read with no retry. The token argument
/// means a caller must have resolved a credential before a fetch can happen.
pub trait BlockSource: Send + Sync {
    /// Fetch the direct children of `page_id`.
    fn fetch(&self, page_id: &str, token: &ApiToken) -> Result<PageResult, NotionError>;
}
