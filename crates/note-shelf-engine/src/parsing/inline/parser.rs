use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the preprocessed text where `s` begins
/// - `s`: The content to parse (one line, markers already stripped)
///
/// # Precedence
/// At each position: code span, link, strong, emphasis. Code spans are raw
/// zones; a construct that never closes is left as text.
///
/// # Returns
/// Nodes covering the whole input. Text between constructs is emitted as
/// `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = try_parse_code_span(&mut cur)
            .or_else(|| try_parse_link(&mut cur))
            .or_else(|| try_parse_strong(&mut cur))
            .or_else(|| try_parse_emphasis(&mut cur));

        match node {
            Some(node) => {
                let span = node.span();
                flush_text(&mut out, text_start, span.start);
                text_start = span.end;
                out.push(node);
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a non-empty code span starting at the current position.
///
/// On failure the cursor is left where it was.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let open = cur.i;
    let close = cur.find_byte_from(open + 1, CodeSpan::TICK)?;
    if close == open + 1 {
        return None;
    }

    let node = InlineNode::CodeSpan {
        full: Span::new(cur.base + open, cur.base + close + 1),
        inner: Span::new(cur.base + open + 1, cur.base + close),
    };
    cur.jump_to(close + 1);
    Some(node)
}

/// Attempts to parse `[text](url)` or `[text](url "title")`.
///
/// The URL must be `http://` or `https://` followed by at least one
/// character; it ends at whitespace or `)`. The title is skipped.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let b = cur.s.as_bytes();
    let open = cur.i;
    let text_end = cur.find_byte_from(open + 1, Link::TEXT_CLOSE)?;
    if text_end == open + 1 || b.get(text_end + 1) != Some(&Link::URL_OPEN) {
        return None;
    }

    let url_start = text_end + 2;
    let rest = &b[url_start..];
    let scheme = Link::SCHEMES
        .iter()
        .find(|scheme| rest.starts_with(scheme.as_bytes()))?;
    let url_len = rest
        .iter()
        .take_while(|&&c| !c.is_ascii_whitespace() && c != Link::URL_CLOSE)
        .count();
    if url_len <= scheme.len() {
        return None;
    }
    let url_end = url_start + url_len;

    let mut i = url_end;
    let ws = b[i..].iter().take_while(|c| c.is_ascii_whitespace()).count();
    if ws > 0 {
        i += ws;
        if b.get(i) != Some(&Link::TITLE_QUOTE) {
            return None;
        }
        i = cur.find_byte_from(i + 1, Link::TITLE_QUOTE)? + 1;
    }
    if b.get(i) != Some(&Link::URL_CLOSE) {
        return None;
    }

    let node = InlineNode::Link {
        full: Span::new(cur.base + open, cur.base + i + 1),
        href: Span::new(cur.base + url_start, cur.base + url_end),
        children: parse_inline(cur.base + open + 1, &cur.s[open + 1..text_end]),
    };
    cur.jump_to(i + 1);
    Some(node)
}

/// Attempts to parse `**text**` or `__text__` with the shortest non-empty content.
///
/// Code spans and links inside the content are stepped over whole.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let delim = Emphasis::STRONG
        .into_iter()
        .find(|d| cur.starts_with(d.as_bytes()))?;

    let open = cur.i;
    let inner_start = open + delim.len();
    let close = find_closer(cur, inner_start, inner_start + 1, delim.as_bytes())?;

    let node = InlineNode::Strong {
        full: Span::new(cur.base + open, cur.base + close + delim.len()),
        children: parse_inline(cur.base + inner_start, &cur.s[inner_start..close]),
    };
    cur.jump_to(close + delim.len());
    Some(node)
}

/// Attempts to parse `*text*` or `_text_`.
///
/// The closer is the next single delimiter; complete strong runs of the same
/// character are stepped over so `*a **b** c*` nests. The `_` form must not
/// touch a word character on its outside.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let delim = cur
        .peek()
        .filter(|&b| b == Emphasis::STAR || b == Emphasis::UNDERSCORE)?;
    let needs_boundary = delim == Emphasis::UNDERSCORE;

    if needs_boundary && cur.prev().is_some_and(Emphasis::is_word_byte) {
        return None;
    }

    let open = cur.i;
    let close = find_emphasis_close(cur, open + 1, delim)?;
    if close == open + 1 {
        return None;
    }
    let after = cur.s.as_bytes().get(close + 1).copied();
    if needs_boundary && after.is_some_and(Emphasis::is_word_byte) {
        return None;
    }

    let node = InlineNode::Emphasis {
        full: Span::new(cur.base + open, cur.base + close + 1),
        children: parse_inline(cur.base + open + 1, &cur.s[open + 1..close]),
    };
    cur.jump_to(close + 1);
    Some(node)
}

fn find_emphasis_close(cur: &Cursor<'_>, from: usize, delim: u8) -> Option<usize> {
    let b = cur.s.as_bytes();
    let strong = [delim, delim];
    let mut j = from;
    loop {
        let close = find_closer(cur, j, j, &[delim])?;
        if b.get(close + 1) == Some(&delim)
            && let Some(strong_close) = find_closer(cur, close + 2, close + 3, &strong)
        {
            j = strong_close + strong.len();
            continue;
        }
        return Some(close);
    }
}

/// Local index of the first `delim` at or after `min`, scanning from `from`.
///
/// Complete code spans and links are raw zones: a delimiter inside one is
/// never a closer.
fn find_closer(cur: &Cursor<'_>, from: usize, min: usize, delim: &[u8]) -> Option<usize> {
    let b = cur.s.as_bytes();
    let mut j = from;
    while j < b.len() {
        if let Some(end) = raw_zone_end(cur, j) {
            j = end;
            continue;
        }
        if j >= min && b[j..].starts_with(delim) {
            return Some(j);
        }
        j += 1;
    }
    None
}

/// End of the code span or link that starts at local index `j`, if any.
fn raw_zone_end(cur: &Cursor<'_>, j: usize) -> Option<usize> {
    let at = *cur.s.as_bytes().get(j)?;
    if at != CodeSpan::TICK && at != Link::OPEN {
        return None;
    }
    let mut ahead = cur.clone();
    ahead.jump_to(j);
    try_parse_code_span(&mut ahead).or_else(|| try_parse_link(&mut ahead))?;
    Some(ahead.i)
}
