/// Blockquote block type with owned delimiter constant.
///
/// Only a single level is supported: `> text`. Nested quotes are plain
/// content of the outer quote.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text if the line is `> ` followed by something.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).filter(|rest| !rest.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn prefix_needs_space_and_text() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), None);
        assert_eq!(BlockQuote::strip_prefix("> "), None);
    }

    #[test]
    fn nested_marker_is_content() {
        assert_eq!(BlockQuote::strip_prefix("> > deep"), Some("> deep"));
    }
}
