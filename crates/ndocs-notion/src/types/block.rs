//! Content blocks.
//!
//! On the wire every block stores its payload under a field named after its
//! own type tag:
//!
//! ```json
//! {"id": "…", "type": "heading_1", "heading_1": {"rich_text": […], "color": "default"}}
//! ```
//!
//! [`Block`] folds that into an explicit [`BlockKind`] plus one shared
//! [`BlockContent`] payload. The payload is looked up under the tag's own field
//! name only, so the kind always matches the populated payload.
//!
//! Parsing a block never fails: a missing or mistyped `id` or `type` reads as
//! empty, and anything that is not an object becomes an unsupported block.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::null_as_default;

/// Kind of a content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    Callout,
    NumberedListItem,
    BulletedListItem,
    Code,
    /// Any tag the renderer does not know, kept verbatim.
    Unsupported(String),
}

impl BlockKind {
    /// Parse a wire type tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "heading_1" => Self::Heading1,
            "heading_2" => Self::Heading2,
            "heading_3" => Self::Heading3,
            "paragraph" => Self::Paragraph,
            "callout" => Self::Callout,
            "numbered_list_item" => Self::NumberedListItem,
            "bulleted_list_item" => Self::BulletedListItem,
            "code" => Self::Code,
            other => Self::Unsupported(other.to_owned()),
        }
    }

    /// Wire type tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Heading1 => "heading_1",
            Self::Heading2 => "heading_2",
            Self::Heading3 => "heading_3",
            Self::Paragraph => "paragraph",
            Self::Callout => "callout",
            Self::NumberedListItem => "numbered_list_item",
            Self::BulletedListItem => "bulleted_list_item",
            Self::Code => "code",
            Self::Unsupported(tag) => tag,
        }
    }
}

/// Payload shared by every supported block kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlockContent {
    /// Inline text runs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rich_text: Vec<super::TextRun>,
    /// Block color. Not used for rendering.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

/// A single content block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct Block {
    /// Block ID, unique within a page.
    pub id: String,
    /// Block kind.
    pub kind: BlockKind,
    /// Payload (`None` for unsupported kinds or a missing/malformed payload).
    pub content: Option<BlockContent>,
}

impl Block {
    /// Create a block with the given runs and default color.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: BlockKind, rich_text: Vec<super::TextRun>) -> Self {
        let content = match kind {
            BlockKind::Unsupported(_) => None,
            _ => Some(BlockContent {
                rich_text,
                color: "default".to_owned(),
            }),
        };
        Self {
            id: id.into(),
            kind,
            content,
        }
    }

    /// Inline runs of the block, empty when the payload is absent.
    #[must_use]
    pub fn rich_text(&self) -> &[super::TextRun] {
        self.content
            .as_ref()
            .map(|c| c.rich_text.as_slice())
            .unwrap_or_default()
    }
}

impl From<Value> for Block {
    fn from(value: Value) -> Self {
        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        let id = take_string(&mut fields, "id");
        let tag = take_string(&mut fields, "type");
        let kind = BlockKind::from_tag(&tag);
        let content = match kind {
            BlockKind::Unsupported(_) => None,
            _ => fields
                .remove(&tag)
                .and_then(|value| serde_json::from_value(value).ok()),
        };
        Self { id, kind, content }
    }
}

/// Remove a string field, reading absent or non-string values as empty.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> String {
    match fields.remove(key) {
        Some(Value::String(value)) => value,
        _ => String::new(),
    }
}
