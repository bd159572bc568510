//! Line-ending normalization and fenced code block extraction.
//!
//! Runs before any block or inline parsing so that code content is never
//! rewritten by later rules.

use std::borrow::Cow;

use super::{blocks::kinds::CodeFence, placeholder::ExtractedBlocks};

/// Text with fenced code blocks swapped for placeholder tokens.
#[derive(Debug, Clone, Default)]
pub struct Preprocessed {
    /// Normalized text; each extracted block is a token on a line of its own,
    /// with a blank line on either side.
    pub text: String,
    /// The rendered code blocks, in document order.
    pub blocks: ExtractedBlocks,
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Normalizes line endings and extracts every terminated fenced code block.
///
/// An opening fence without a matching closing fence is left in place as
/// ordinary text, together with everything after it.
pub fn preprocess(source: &str) -> Preprocessed {
    let normalized = normalize_line_endings(source);
    let lines: Vec<&str> = normalized.split('\n').collect();

    let closer_ticks_after = longest_closer_from(&lines);

    let mut blocks = ExtractedBlocks::new();
    let mut out: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let Some(open) = CodeFence::open(lines[i]) else {
            out.push(Cow::Borrowed(lines[i]));
            i += 1;
            continue;
        };

        let close = (closer_ticks_after[i + 1] >= open.ticks)
            .then(|| (i + 1..lines.len()).find(|&j| CodeFence::closes(&open, lines[j])))
            .flatten();
        match close {
            Some(j) => {
                let html = CodeFence::render(open.lang.as_deref(), &lines[i + 1..j]);
                let token = blocks.push(html).to_string();
                out.push(Cow::Borrowed(""));
                out.push(Cow::Owned(token));
                out.push(Cow::Borrowed(""));
                i = j + 1;
            }
            None => {
                log::trace!("unterminated code fence at line {}", i + 1);
                out.push(Cow::Borrowed(lines[i]));
                i += 1;
            }
        }
    }

    Preprocessed {
        text: out.join("\n"),
        blocks,
    }
}

/// For each line index, the longest closing fence at or after it.
///
/// Lets an opener with no possible closer be rejected without scanning the
/// rest of the document, keeping stray fences linear.
fn longest_closer_from(lines: &[&str]) -> Vec<usize> {
    let mut out = vec![0; lines.len() + 1];
    for (j, line) in lines.iter().enumerate().rev() {
        out[j] = out[j + 1].max(CodeFence::closer_ticks(line));
    }
    out
}
