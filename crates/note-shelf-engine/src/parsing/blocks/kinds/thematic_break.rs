/// Horizontal rule: three or more of one of `-`, `*`, `_` and nothing else.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let b = line.trim_end().as_bytes();
        match b.first() {
            Some(first) if Self::CHARS.contains(first) => {
                b.len() >= Self::MIN_LEN && b.iter().all(|c| c == first)
            }
            _ => false,
        }
    }
}
