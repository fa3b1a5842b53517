//! Rendered document tree.

/// Container kind of a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum NodeKind {
    /// Heading with level 1-3.
    Heading { level: u8 },
    Paragraph,
    /// Emphasized block with distinct visual treatment.
    Callout,
    /// List item rendered on its own, without a list wrapper.
    ListItem,
    /// Preformatted block.
    Preformatted,
}

/// Visual style marker of an inline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Style {
    Strong,
    Emphasis,
    Strikethrough,
    Underline,
    Code,
}

/// Styled inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InlineNode {
    /// Raw text content.
    pub text: String,
    /// Style markers, in [`Style`] order, one per set flag.
    pub styles: Vec<Style>,
}

impl InlineNode {
    /// Whether the node carries the given style.
    #[must_use]
    pub fn has_style(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    /// Whether the node is plain text with no styles.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Rendered block container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedNode {
    /// Identity key, equal to the source block ID.
    pub key: String,
    /// Container kind.
    pub kind: NodeKind,
    /// Inline content in run order.
    pub children: Vec<InlineNode>,
}

impl RenderedNode {
    /// Concatenated text of all inline children.
    #[must_use]
    pub fn text(&self) -> String {
        self.children.iter().map(|c| c.text.as_str()).collect()
    }
}
