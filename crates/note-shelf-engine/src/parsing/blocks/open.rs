use super::kinds::{BlockQuote, Heading, ListItem, ListKind, ThematicBreak};

/// A block opener recognized at the start of a line, borrowing its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Heading { level: u8, content: &'a str },
    ThematicBreak,
    Quote { content: &'a str },
    ListItem { kind: ListKind, content: &'a str },
}

/// Tries every block opener in precedence order: heading, rule, quote, list.
pub fn try_open_leaf(line: &str) -> Option<BlockOpen<'_>> {
    if let Some((level, content)) = Heading::parse(line) {
        return Some(BlockOpen::Heading { level, content });
    }
    if ThematicBreak::matches(line) {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some(content) = BlockQuote::strip_prefix(line) {
        return Some(BlockOpen::Quote { content });
    }
    if let Some((kind, content)) = ListItem::parse(line) {
        return Some(BlockOpen::ListItem { kind, content });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_beats_everything() {
        assert_eq!(
            try_open_leaf("# - not a list"),
            Some(BlockOpen::Heading {
                level: 1,
                content: "- not a list"
            })
        );
    }

    #[test]
    fn rule_beats_list() {
        assert_eq!(try_open_leaf("***"), Some(BlockOpen::ThematicBreak));
        assert_eq!(try_open_leaf("---"), Some(BlockOpen::ThematicBreak));
    }

    #[test]
    fn quote_content_is_not_a_list() {
        assert_eq!(
            try_open_leaf("> - item"),
            Some(BlockOpen::Quote { content: "- item" })
        );
    }

    #[test]
    fn plain_text_opens_nothing() {
        assert_eq!(try_open_leaf("just words"), None);
        assert_eq!(try_open_leaf("*emphasis* first"), None);
    }
}
