//! Notion API types.

mod block;
mod page;
mod rich_text;

pub use block::{Block, BlockContent, BlockKind};
pub use page::PageResult;
pub use rich_text::{Annotations, Link, TextContent, TextRun};

use serde::{Deserialize, Deserializer};

/// Deserialize a field, reading an explicit `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
