//! Placeholder tokens standing in for extracted code blocks.
//!
//! Fenced code blocks are rendered up front and replaced by an opaque token.
//! Tokens are made of private-use characters around a decimal index, so no
//! block or inline rule ever reacts to them. The [`ExtractedBlocks`] value is
//! handed from the preprocessor to the final restore step.

use std::sync::OnceLock;

use regex::Regex;

/// Opening character of a placeholder token (Unicode private use area).
pub const TOKEN_OPEN: char = '\u{E000}';
/// Closing character of a placeholder token.
pub const TOKEN_CLOSE: char = '\u{E001}';
const TOKEN_TAG: &str = "CODEBLOCK";

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"\x{E000}CODEBLOCK(\d+)\x{E001}").expect("Invalid placeholder regex")
    })
}

/// Builds the token for the block at `index`.
pub fn token_for(index: usize) -> String {
    format!("{TOKEN_OPEN}{TOKEN_TAG}{index}{TOKEN_CLOSE}")
}

/// Returns the block index if `s` is exactly one placeholder token.
pub fn parse_token(s: &str) -> Option<usize> {
    s.strip_prefix(TOKEN_OPEN)?
        .strip_suffix(TOKEN_CLOSE)?
        .strip_prefix(TOKEN_TAG)?
        .parse()
        .ok()
}

/// One extracted block: its token and the HTML it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    pub token: String,
    pub html: String,
}

/// Ordered list of blocks removed from the text before block and inline parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedBlocks {
    blocks: Vec<ExtractedBlock>,
}

impl ExtractedBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records rendered HTML and returns the token that stands for it.
    pub fn push(&mut self, html: String) -> &str {
        let token = token_for(self.blocks.len());
        self.blocks.push(ExtractedBlock { token, html });
        &self.blocks[self.blocks.len() - 1].token
    }

    pub fn get(&self, index: usize) -> Option<&ExtractedBlock> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractedBlock> {
        self.blocks.iter()
    }

    /// Replaces every known token in `html` with its stored HTML, verbatim.
    ///
    /// Tokens with an index this list never issued are left alone.
    pub fn restore(&self, html: &str) -> String {
        if self.blocks.is_empty() {
            return html.to_string();
        }
        token_regex()
            .replace_all(html, |caps: &regex::Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.blocks.get(i))
                    .map_or_else(|| caps[0].to_string(), |b| b.html.clone())
            })
            .into_owned()
    }
}
