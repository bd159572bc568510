use super::span::Span;

/// A reference to a single line of the text with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of the line, excluding the terminating `\n`.
    pub span: Span,
    /// The line text, excluding the terminating `\n`.
    pub text: &'a str,
}

/// Returns an iterator over the `\n`-separated lines of `text` with their spans.
///
/// Expects line endings to be normalized already. A trailing newline does not
/// produce an extra empty line, matching `str::lines`.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        LineRef {
            span: Span::new(start, start + line.len()),
            text: line,
        }
    })
}
