//! Shared utility functions for HTML output.

/// Escape text for use in HTML content and attribute values.
///
/// # Examples
///
/// ```
/// use ndocs_renderer::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
