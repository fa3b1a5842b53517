//! Rich text runs.

use serde::Deserialize;

use super::null_as_default;

/// Contiguous span of text sharing one combination of style flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextRun {
    /// Run type ("text", "mention", "equation").
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub run_type: String,
    /// Text payload (present for "text" runs).
    #[serde(default)]
    pub text: Option<TextContent>,
    /// Style flags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: Annotations,
    /// Flattened text of the run.
    #[serde(default, deserialize_with = "null_as_default")]
    pub plain_text: String,
    /// Link target.
    #[serde(default)]
    pub href: Option<String>,
}

/// Text payload of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextContent {
    /// Raw text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Inline link.
    #[serde(default)]
    pub link: Option<Link>,
}

/// Inline link target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// Target URL.
    pub url: String,
}

/// Style flags of a run. Each flag is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    /// Text color name ("default", "gray", ...).
    pub color: String,
}

impl TextRun {
    /// Create an unstyled text run.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            run_type: "text".to_owned(),
            plain_text: content.clone(),
            text: Some(TextContent {
                content,
                link: None,
            }),
            annotations: Annotations {
                color: "default".to_owned(),
                ..Annotations::default()
            },
            href: None,
        }
    }

    /// Set the bold flag.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.annotations.bold = true;
        self
    }

    /// Set the italic flag.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.annotations.italic = true;
        self
    }

    /// Set the strikethrough flag.
    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.annotations.strikethrough = true;
        self
    }

    /// Set the underline flag.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.annotations.underline = true;
        self
    }

    /// Set the code flag.
    #[must_use]
    pub fn code(mut self) -> Self {
        self.annotations.code = true;
        self
    }

    /// Raw text of the run.
    ///
    /// Uses `text.content`, falling back to `plain_text` for runs without a
    /// text payload (mentions, equations).
    #[must_use]
    pub fn content(&self) -> &str {
        self.text
            .as_ref()
            .map_or(self.plain_text.as_str(), |t| t.content.as_str())
    }
}
