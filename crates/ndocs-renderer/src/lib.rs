//! Block renderer for Notion content.
//!
//! This crate turns the flat block list of a Notion page into a small
//! document tree and serializes it to HTML.
//!
//! # Architecture
//!
//! - [`render`] / [`render_run`]: pure conversion of blocks and text runs into
//!   [`RenderedNode`]s and [`InlineNode`]s
//! - [`to_html`]: HTML serialization of the node tree
//!
//! With the `serde` feature the node tree implements `Serialize`.
//!
//! # Example
//!
//! ```
//! use ndocs_notion::{Block, BlockKind, TextRun};
//! use ndocs_renderer::{render, to_html};
//!
//! let blocks = vec![Block::new(
//!     "b1",
//!     BlockKind::Paragraph,
//!     vec![TextRun::plain("Hello "), TextRun::plain("world").bold()],
//! )];
//! let html = to_html(&render(Some(blocks.as_slice())));
//! assert_eq!(html, r#"<p data-block-id="b1">Hello <strong>world</strong></p>"#);
//! ```

mod html;
mod node;
mod renderer;
mod util;

pub use html::{to_html, write_inline, write_node};
pub use node::{InlineNode, NodeKind, RenderedNode, Style};
pub use renderer::{render, render_block, render_run};
pub use util::escape_html;
