//! HTML document shell for rendered pages.

use std::fmt::Write;

use ndocs_renderer::escape_html;

/// Stylesheet shared by all pages.
const STYLE: &str = "\
body { font-family: system-ui, sans-serif; line-height: 1.6; color: #111827; }
article { max-width: 48rem; margin: 0 auto; padding: 1.5rem 1rem 3rem; }
pre { background: #f3f4f6; padding: 1rem; border-radius: 0.375rem; overflow-x: auto; }
code { background: #f3f4f6; padding: 0.25rem; border-radius: 0.375rem; }
pre code { padding: 0; }
.callout { background: #dbeafe; padding: 1rem; border-radius: 0.375rem; }
";

/// Head data shared by every page.
pub struct DocumentData<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Rendered HTML placed inside `<article>`.
    pub body_html: &'a str,
}

/// Render a complete HTML document.
pub fn render_document(doc: &DocumentData<'_>) -> String {
    let mut html = String::with_capacity(1024 + doc.body_html.len());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(html, "<title>{}</title>", escape_html(doc.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(doc.description)
    );
    let _ = write!(html, "<style>\n{STYLE}</style>\n");
    html.push_str("</head>\n<body>\n<article>\n");
    html.push_str(doc.body_html);
    html.push_str("\n</article>\n</body>\n</html>");
    html
}

/// Render the catalog listing: one link per page ID.
pub fn render_catalog_list(page_ids: &[String]) -> String {
    let mut html = String::from("<ul>");
    for id in page_ids {
        let id = escape_html(id);
        let _ = write!(
            html,
            r#"<li><a href="{}">{id}</a></li>"#,
            crate::page_path(&id)
        );
    }
    html.push_str("</ul>");
    html
}
