use crate::parsing::{
    placeholder,
    text::{LineRef, Span},
};

use super::{
    kinds::ListKind,
    open::{BlockOpen, try_open_leaf},
};

/// What a single line is, judged on its own text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Exactly one placeholder token.
    Placeholder { index: usize },
    Heading { level: u8 },
    ThematicBreak,
    Quote,
    ListItem { kind: ListKind },
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    /// Byte span of the line, without its newline.
    pub line: Span,
    pub kind: LineKind,
    /// Byte span of the text left once block markers are stripped.
    pub content: Span,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        let kind_and_content = |kind: LineKind, content: &str| LineClass {
            line: lr.span,
            kind,
            content: Span::new(lr.span.end - content.len(), lr.span.end),
        };

        if lr.text.trim().is_empty() {
            return kind_and_content(LineKind::Blank, "");
        }
        if let Some(index) = placeholder::parse_token(lr.text) {
            return kind_and_content(LineKind::Placeholder { index }, lr.text);
        }

        match try_open_leaf(lr.text) {
            Some(BlockOpen::Heading { level, content }) => {
                kind_and_content(LineKind::Heading { level }, content)
            }
            Some(BlockOpen::ThematicBreak) => kind_and_content(LineKind::ThematicBreak, ""),
            Some(BlockOpen::Quote { content }) => kind_and_content(LineKind::Quote, content),
            Some(BlockOpen::ListItem { kind, content }) => {
                kind_and_content(LineKind::ListItem { kind }, content)
            }
            None => kind_and_content(LineKind::Text, lr.text),
        }
    }
}
