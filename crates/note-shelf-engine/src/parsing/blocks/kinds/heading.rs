/// ATX heading type. Only levels one to three are recognized.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 3;

    /// Returns `(level, content)` for `# `, `## ` or `### ` followed by text.
    ///
    /// The longest marker run is tried first so `### x` never reads as a
    /// level-one heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        (1..=Self::MAX_LEVEL).rev().find_map(|level| {
            let hashes = level as usize;
            let b = line.as_bytes();
            if b.len() > hashes + 1
                && b[..hashes].iter().all(|&c| c == Self::MARKER)
                && b[hashes] == b' '
            {
                Some((level, &line[hashes + 1..]))
            } else {
                None
            }
        })
    }
}
