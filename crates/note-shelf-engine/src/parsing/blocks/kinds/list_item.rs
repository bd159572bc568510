/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// The HTML element name for a list of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// List item type: `* `, `- ` or `digits. ` at the start of a line.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 2] = ["* ", "- "];
    pub const ORDERED_DELIMITER: &'static str = ". ";

    /// Returns the list kind and the item text.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        for bullet in Self::BULLETS {
            if let Some(rest) = line.strip_prefix(bullet) {
                return (!rest.is_empty()).then_some((ListKind::Unordered, rest));
            }
        }

        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        line[digits..]
            .strip_prefix(Self::ORDERED_DELIMITER)
            .filter(|rest| !rest.is_empty())
            .map(|rest| (ListKind::Ordered, rest))
    }
}
