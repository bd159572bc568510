use crate::parsing::text::Span;

/// A parsed inline node with byte spans into the preprocessed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// `**text**` or `__text__`.
    Strong { full: Span, children: Vec<InlineNode> },
    /// `*text*` or `_text_`.
    Emphasis { full: Span, children: Vec<InlineNode> },
    /// `[text](http(s)://url "title")`. The title is not kept.
    Link {
        full: Span,
        /// Span of the URL.
        href: Span,
        /// Parsed link text.
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// The full span of the node, delimiters included.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::Link { full, .. } => *full,
        }
    }
}
