use crate::parsing::text::Span;

use super::{
    classify::{LineClass, LineKind},
    types::{BlockKind, BlockNode},
};

/// Builds blocks from classified lines.
///
/// Quote lines, list items of one kind and text lines extend the block that
/// is open when they are line-adjacent to it. Any other line, or a blank line,
/// closes the open block first.
pub struct BlockBuilder {
    open: Option<BlockNode>,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        let kind = match c.kind {
            LineKind::Blank => {
                self.flush();
                return;
            }
            LineKind::Placeholder { index } => BlockKind::CodeBlock { index },
            LineKind::Heading { level } => BlockKind::Heading { level },
            LineKind::ThematicBreak => BlockKind::ThematicBreak,
            LineKind::Quote => BlockKind::BlockQuote,
            LineKind::ListItem { kind } => BlockKind::List { kind },
            LineKind::Text => BlockKind::Paragraph,
        };

        if let Some(open) = self.open.as_mut()
            && open.kind == kind
        {
            open.span.end = c.line.end;
            open.lines.push(c.content);
            return;
        }

        self.flush();
        let node = BlockNode {
            kind,
            span: c.line,
            lines: vec![c.content],
        };
        if kind.merges_adjacent() {
            self.open = Some(node);
        } else {
            self.out.push(node);
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if let Some(node) = self.open.take() {
            self.out.push(node);
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
