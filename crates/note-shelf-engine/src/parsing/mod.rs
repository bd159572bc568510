//! # Markdown rendering
//!
//! The renderer is a fixed pipeline; each stage hands an explicit value to
//! the next:
//!
//! ```text
//! source ─ preprocess ─► text + ExtractedBlocks
//!            │
//!            └─ classify lines ─► build blocks ─► inline per block ─► HTML
//!                                                                     │
//!                                   ExtractedBlocks::restore ◄────────┘
//! ```
//!
//! Rendering is total: unmatched syntax is written through as text.

pub mod blocks;
pub mod inline;
pub mod placeholder;
pub mod preprocess;
pub mod render;
pub mod text;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use text::lines_with_spans;

pub use placeholder::ExtractedBlocks;
pub use preprocess::{Preprocessed, preprocess};

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Parses preprocessed text into blocks.
pub fn parse_document(text: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(text) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Inline parse for each content line of a block.
///
/// Rules and code blocks have no inline content and yield no lines.
pub fn parse_inline_for_block(text: &str, b: &BlockNode) -> Vec<Vec<inline::InlineNode>> {
    if matches!(b.kind, BlockKind::ThematicBreak | BlockKind::CodeBlock { .. }) {
        return vec![];
    }
    b.lines
        .iter()
        .map(|sp| inline::parse_inline(sp.start, sp.slice(text)))
        .collect()
}

/// Renders a Markdown note to an HTML fragment.
///
/// # Example
/// ```
/// let html = note_shelf_engine::render_markdown("# Hello\n\n- a\n- b");
/// assert_eq!(html, "<h1>Hello</h1>\n<ul><li>a</li><li>b</li></ul>");
/// ```
pub fn render_markdown(source: &str) -> String {
    let Preprocessed { text, blocks: extracted } = preprocess(source);
    let doc = parse_document(&text);
    let html = render::render_blocks(&text, &doc.blocks);
    let html = extracted.restore(&html);
    log::trace!(
        "rendered {} bytes of markdown into {} blocks ({} code blocks)",
        source.len(),
        doc.blocks.len(),
        extracted.len()
    );
    html
}
