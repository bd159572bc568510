use serde::{Deserialize, Serialize};

/// How a note's text is shown: rendered Markdown or literal preformatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Markdown,
    PlainText,
}

impl ContentType {
    pub const MARKDOWN_EXTENSION: &'static str = ".md";

    /// `.md` files are Markdown (case-insensitive); everything else is plain text.
    pub fn from_filename(filename: &str) -> Self {
        if filename
            .to_ascii_lowercase()
            .ends_with(Self::MARKDOWN_EXTENSION)
        {
            ContentType::Markdown
        } else {
            ContentType::PlainText
        }
    }
}
