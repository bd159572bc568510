//! HTML output for parsed blocks and inline nodes.
//!
//! Only code content and attribute values are escaped; all other note text
//! is trusted and written through as-is.

use super::{
    blocks::{BlockKind, BlockNode, kinds::Paragraph},
    inline::{InlineNode, kinds::{CodeSpan, Link}},
    parse_inline_for_block, placeholder,
};

/// Renders blocks as HTML fragments joined by single newlines.
///
/// Code blocks are written as their placeholder tokens; the caller restores
/// them afterwards.
pub fn render_blocks(text: &str, blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .map(|b| render_block(text, b))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(text: &str, b: &BlockNode) -> String {
    let lines: Vec<String> = parse_inline_for_block(text, b)
        .iter()
        .map(|nodes| render_inline(text, nodes))
        .collect();

    match b.kind {
        BlockKind::Heading { level } => format!("<h{level}>{}</h{level}>", lines.concat()),
        BlockKind::ThematicBreak => "<hr>".to_string(),
        BlockKind::BlockQuote => format!("<blockquote>{}</blockquote>", lines.join("\n")),
        BlockKind::List { kind } => {
            let tag = kind.tag();
            let items: String = lines
                .iter()
                .map(|item| format!("<li>{}</li>", item.trim()))
                .collect();
            format!("<{tag}>{items}</{tag}>")
        }
        BlockKind::Paragraph => render_paragraph(&lines.join("\n")),
        BlockKind::CodeBlock { index } => placeholder::token_for(index),
    }
}

/// Wraps paragraph text in `<p>`, turning inner newlines into `<br>`.
///
/// Text that already starts with block markup, or closes a block element
/// anywhere, is passed through unwrapped.
fn render_paragraph(joined: &str) -> String {
    let body = joined.trim();
    if Paragraph::starts_with_block(body) || Paragraph::contains_block_close(body) {
        return body.to_string();
    }
    if !body.contains('\n') {
        return format!("<p>{body}</p>");
    }
    format!("<p>{}</p>", body.replace('\n', Paragraph::LINE_BREAK))
}

/// Renders inline nodes to an HTML string.
pub fn render_inline(text: &str, nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    push_inline(&mut out, text, nodes);
    out
}

fn push_inline(out: &mut String, text: &str, nodes: &[InlineNode]) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push_str(sp.slice(text)),
            InlineNode::CodeSpan { inner, .. } => {
                out.push_str("<code class=\"");
                out.push_str(CodeSpan::CLASS);
                out.push_str("\">");
                out.push_str(&html_escape::encode_text(inner.slice(text)));
                out.push_str("</code>");
            }
            InlineNode::Strong { children, .. } => {
                out.push_str("<strong>");
                push_inline(out, text, children);
                out.push_str("</strong>");
            }
            InlineNode::Emphasis { children, .. } => {
                out.push_str("<em>");
                push_inline(out, text, children);
                out.push_str("</em>");
            }
            InlineNode::Link { href, children, .. } => {
                out.push_str("<a href=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(
                    href.slice(text),
                ));
                out.push_str("\" target=\"");
                out.push_str(Link::TARGET);
                out.push_str("\" rel=\"");
                out.push_str(Link::REL);
                out.push_str("\">");
                push_inline(out, text, children);
                out.push_str("</a>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::parse_inline;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn inline(s: &str) -> String {
        render_inline(s, &parse_inline(0, s))
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("`a<b>&c`", "<code class=\"language-text\">a&lt;b&gt;&amp;c</code>")]
    #[case("**b** and *i*", "<strong>b</strong> and <em>i</em>")]
    #[case("__b__ _i_", "<strong>b</strong> <em>i</em>")]
    #[case("**`x`**", "<strong><code class=\"language-text\">x</code></strong>")]
    #[case(
        "[**x**](http://a.b)",
        "<a href=\"http://a.b\" target=\"_blank\" rel=\"noopener noreferrer\"><strong>x</strong></a>"
    )]
    #[case("a < b", "a < b")]
    fn inline_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(inline(input), expected);
    }

    #[test]
    fn href_quotes_are_escaped() {
        let html = inline("[x](https://a.b/\"q)");
        assert!(html.contains("href=\"https://a.b/&quot;q\""));
    }

    #[rstest]
    #[case("one line", "<p>one line</p>")]
    #[case("  padded  ", "<p>padded</p>")]
    #[case("a\nb\nc", "<p>a<br>b<br>c</p>")]
    #[case("<ul><li>raw</li></ul>", "<ul><li>raw</li></ul>")]
    #[case("text then </blockquote>\nmore", "text then </blockquote>\nmore")]
    #[case("<hr> after", "<hr> after")]
    fn paragraph_wrapping(#[case] joined: &str, #[case] expected: &str) {
        assert_eq!(render_paragraph(joined), expected);
    }
}
