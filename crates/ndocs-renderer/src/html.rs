//! HTML output for rendered nodes.
//!
//! Produces semantic HTML5 fragments:
//! - `<h1>`..`<h3>` for headings, `<p>` for paragraphs
//! - `<div class="callout">` for callouts
//! - bare `<li>` for list items (no `<ol>`/`<ul>` wrapper)
//! - `<pre>` for code blocks
//!
//! Every block container carries `data-block-id` with its source block ID.
//! Text is HTML-escaped; nothing else is sanitized.

use std::fmt::Write;

use crate::node::{InlineNode, NodeKind, RenderedNode, Style};
use crate::util::escape_html;

/// Serialize rendered nodes to an HTML fragment.
#[must_use]
pub fn to_html(nodes: &[RenderedNode]) -> String {
    let mut out = String::with_capacity(nodes.len() * 64);
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

/// Write a single block container.
pub fn write_node(node: &RenderedNode, out: &mut String) {
    let (tag, class) = container(node.kind);
    match class {
        Some(class) => write!(
            out,
            r#"<{tag} class="{class}" data-block-id="{}">"#,
            escape_html(&node.key)
        )
        .unwrap(),
        None => write!(out, r#"<{tag} data-block-id="{}">"#, escape_html(&node.key)).unwrap(),
    }
    for child in &node.children {
        write_inline(child, out);
    }
    write!(out, "</{tag}>").unwrap();
}

/// Write inline text wrapped in one element per style.
///
/// Styles nest in [`Style`] order, so bold code becomes
/// `<strong><code>…</code></strong>`.
pub fn write_inline(node: &InlineNode, out: &mut String) {
    for style in &node.styles {
        write!(out, "<{}>", style_tag(*style)).unwrap();
    }
    out.push_str(&escape_html(&node.text));
    for style in node.styles.iter().rev() {
        write!(out, "</{}>", style_tag(*style)).unwrap();
    }
}

/// Element name and optional class for a container kind.
fn container(kind: NodeKind) -> (&'static str, Option<&'static str>) {
    match kind {
        NodeKind::Heading { level: 1 } => ("h1", None),
        NodeKind::Heading { level: 2 } => ("h2", None),
        NodeKind::Heading { .. } => ("h3", None),
        NodeKind::Paragraph => ("p", None),
        NodeKind::Callout => ("div", Some("callout")),
        NodeKind::ListItem => ("li", None),
        NodeKind::Preformatted => ("pre", None),
    }
}

/// Element name for a style marker.
fn style_tag(style: Style) -> &'static str {
    match style {
        Style::Strong => "strong",
        Style::Emphasis => "em",
        Style::Strikethrough => "s",
        Style::Underline => "u",
        Style::Code => "code",
    }
}
