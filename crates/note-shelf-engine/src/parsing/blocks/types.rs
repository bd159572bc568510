use crate::parsing::text::Span;

use super::kinds::ListKind;

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#`, `##` or `###` heading.
    Heading { level: u8 },
    /// A line of `-`, `*` or `_`.
    ThematicBreak,
    /// Line-adjacent `> ` lines.
    BlockQuote,
    /// Line-adjacent items of one list kind.
    List { kind: ListKind },
    /// Consecutive text lines.
    Paragraph,
    /// A placeholder line standing for an extracted code block.
    CodeBlock { index: usize },
}

impl BlockKind {
    /// Whether consecutive lines of this kind merge into one block.
    pub fn merges_adjacent(self) -> bool {
        matches!(
            self,
            BlockKind::BlockQuote | BlockKind::List { .. } | BlockKind::Paragraph
        )
    }
}

/// A parsed block with its kind and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block, from the start of its first line to the
    /// end of its last line.
    pub span: Span,
    /// Per-line content spans with block markers stripped: heading text,
    /// quote lines, list items or paragraph lines.
    pub lines: Vec<Span>,
}
