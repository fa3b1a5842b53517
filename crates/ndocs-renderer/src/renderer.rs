//! Block renderer.
//!
//! Converts Notion blocks into [`RenderedNode`]s. Dispatch is a single match
//! over [`BlockKind`]; kinds without a mapping produce no node.

use ndocs_notion::{Block, BlockKind, TextRun};
use tracing::trace;

use crate::node::{InlineNode, NodeKind, RenderedNode, Style};

/// Render a sequence of blocks.
///
/// Returns an empty vec for `None`. Output order follows input order, and each
/// node's key is its source block ID. Unsupported blocks are skipped.
///
/// # Example
///
/// ```
/// use ndocs_notion::{Block, BlockKind, TextRun};
/// use ndocs_renderer::{NodeKind, render};
///
/// let blocks = vec![Block::new("b1", BlockKind::Heading1, vec![TextRun::plain("Title")])];
/// let nodes = render(Some(blocks.as_slice()));
/// assert_eq!(nodes[0].kind, NodeKind::Heading { level: 1 });
/// assert!(render(None).is_empty());
/// ```
#[must_use]
pub fn render(blocks: Option<&[Block]>) -> Vec<RenderedNode> {
    blocks
        .unwrap_or_default()
        .iter()
        .filter_map(render_block)
        .collect()
}

/// Render a single block, or `None` if its kind has no mapping.
#[must_use]
pub fn render_block(block: &Block) -> Option<RenderedNode> {
    let kind = match &block.kind {
        BlockKind::Heading1 => NodeKind::Heading { level: 1 },
        BlockKind::Heading2 => NodeKind::Heading { level: 2 },
        BlockKind::Heading3 => NodeKind::Heading { level: 3 },
        BlockKind::Paragraph => NodeKind::Paragraph,
        BlockKind::Callout => NodeKind::Callout,
        BlockKind::NumberedListItem | BlockKind::BulletedListItem => NodeKind::ListItem,
        BlockKind::Code => NodeKind::Preformatted,
        BlockKind::Unsupported(tag) => {
            trace!(block_id = %block.id, tag = %tag, "Skipping unsupported block");
            return None;
        }
    };

    Some(RenderedNode {
        key: block.id.clone(),
        kind,
        children: block.rich_text().iter().map(render_run).collect(),
    })
}

/// Render a text run into a styled inline node.
///
/// Each set flag adds its style independently.
#[must_use]
pub fn render_run(run: &TextRun) -> InlineNode {
    let a = &run.annotations;
    let styles = [
        (a.bold, Style::Strong),
        (a.italic, Style::Emphasis),
        (a.strikethrough, Style::Strikethrough),
        (a.underline, Style::Underline),
        (a.code, Style::Code),
    ]
    .into_iter()
    .filter_map(|(on, style)| on.then_some(style))
    .collect();

    InlineNode {
        text: run.content().to_owned(),
        styles,
    }
}
