use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::placeholder::TOKEN_OPEN;

/// Paragraph block type.
///
/// Paragraphs are the default block when no other opener matches. Their
/// text may already carry block markup written by hand; these checks decide
/// when such a paragraph is emitted verbatim instead of being wrapped.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_BREAK: &'static str = "<br>";

    /// True if the text starts with a block-level tag or a placeholder token.
    pub fn starts_with_block(text: &str) -> bool {
        static BLOCK_START: OnceLock<Regex> = OnceLock::new();
        let re = BLOCK_START.get_or_init(|| {
            Regex::new(r"^(?:<h[1-6]>|<ul>|<ol>|<pre>|<blockquote>|<hr>)")
                .expect("Invalid block start regex")
        });
        text.starts_with(TOKEN_OPEN) || re.is_match(text)
    }

    /// True if the text contains a closing block-level tag anywhere.
    pub fn contains_block_close(text: &str) -> bool {
        static BLOCK_CLOSE: OnceLock<Regex> = OnceLock::new();
        let re = BLOCK_CLOSE.get_or_init(|| {
            Regex::new(r"</(?:h[1-6]|ul|ol|li|pre|blockquote)>")
                .expect("Invalid block close regex")
        });
        re.is_match(text)
    }
}
