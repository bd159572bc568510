/// An opening fence line: its backtick count and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub ticks: usize,
    /// Lowercased first word of the info string, if any.
    pub lang: Option<String>,
}

/// Fenced code block type with owned delimiter constants.
///
/// All fence syntax knowledge lives here: the preprocessor asks this type
/// whether a line opens or closes a fence and how to render the body.
pub struct CodeFence;

impl CodeFence {
    pub const TICK: u8 = b'`';
    pub const MIN_TICKS: usize = 3;
    pub const DEFAULT_LANG: &'static str = "text";

    /// Recognizes an opening fence: three or more backticks, then an optional
    /// info string that contains no backtick.
    pub fn open(line: &str) -> Option<FenceOpen> {
        let t = line.trim_start();
        let ticks = t.bytes().take_while(|&b| b == Self::TICK).count();
        if ticks < Self::MIN_TICKS {
            return None;
        }
        let info = t[ticks..].trim();
        if info.bytes().any(|b| b == Self::TICK) {
            return None;
        }
        Some(FenceOpen {
            ticks,
            lang: info.split_whitespace().next().map(str::to_lowercase),
        })
    }

    /// A closing fence is a line of only backticks, at least as many as the opener.
    pub fn closes(open: &FenceOpen, line: &str) -> bool {
        Self::closer_ticks(line) >= open.ticks
    }

    /// Backtick count of a line made only of backticks, otherwise zero.
    pub fn closer_ticks(line: &str) -> usize {
        let t = line.trim();
        if t.bytes().all(|b| b == Self::TICK) {
            t.len()
        } else {
            0
        }
    }

    /// Renders the lines between the fences as a `<pre><code>` block.
    ///
    /// Leading blank lines are dropped and trailing blank lines collapse into
    /// a single newline. Only `&`, `<` and `>` are escaped.
    pub fn render(lang: Option<&str>, body: &[&str]) -> String {
        let mut code = String::new();
        for line in body {
            code.push_str(line);
            code.push('\n');
        }
        let trimmed = code.trim_start_matches('\n').trim_end_matches('\n');
        let code = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}\n")
        };

        let lang = lang.unwrap_or(Self::DEFAULT_LANG);
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            html_escape::encode_double_quoted_attribute(lang),
            html_escape::encode_text(&code)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detect_plain_fence() {
        assert_eq!(
            CodeFence::open("```"),
            Some(FenceOpen {
                ticks: 3,
                lang: None
            })
        );
    }

    #[test]
    fn detect_fence_with_language() {
        let open = CodeFence::open("````Rust ignore").unwrap();
        assert_eq!(open.ticks, 4);
        assert_eq!(open.lang.as_deref(), Some("rust"));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::open("``"), None);
        assert_eq!(CodeFence::open("hello"), None);
        assert_eq!(CodeFence::open("```inline``` code"), None);
    }

    #[test]
    fn closes_needs_enough_ticks() {
        let open = CodeFence::open("````").unwrap();
        assert!(!CodeFence::closes(&open, "```"));
        assert!(CodeFence::closes(&open, "````"));
        assert!(CodeFence::closes(&open, "  `````  "));
        assert!(!CodeFence::closes(&open, "```` x"));
    }

    #[test]
    fn closer_ticks_counts_bare_fences_only() {
        assert_eq!(CodeFence::closer_ticks(" ```` "), 4);
        assert_eq!(CodeFence::closer_ticks("```rust"), 0);
        assert_eq!(CodeFence::closer_ticks(""), 0);
    }

    #[test]
    fn render_escapes_and_trims() {
        let html = CodeFence::render(None, &["", "a < b && c > d", "", ""]);
        assert_eq!(
            html,
            "<pre><code class=\"language-text\">a &lt; b &amp;&amp; c &gt; d\n</code></pre>"
        );
    }

    #[test]
    fn render_empty_body() {
        assert_eq!(
            CodeFence::render(Some("sh"), &[]),
            "<pre><code class=\"language-sh\"></code></pre>"
        );
    }

    #[test]
    fn render_keeps_quotes_literal() {
        let html = CodeFence::render(Some("js"), &["say(\"hi\")"]);
        assert!(html.contains("say(\"hi\")"));
    }
}
