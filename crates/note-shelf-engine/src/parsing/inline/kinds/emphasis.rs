/// Strong and emphasis delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG: [&'static str; 2] = ["**", "__"];
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// ASCII word characters: `_` emphasis must not touch one on its outside.
    pub fn is_word_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == Self::UNDERSCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_bytes() {
        assert!(Emphasis::is_word_byte(b'a'));
        assert!(Emphasis::is_word_byte(b'7'));
        assert!(Emphasis::is_word_byte(b'_'));
        assert!(!Emphasis::is_word_byte(b' '));
        assert!(!Emphasis::is_word_byte(b'>'));
        // continuation bytes of multi-byte characters count as non-word
        assert!(!Emphasis::is_word_byte(0xE4));
    }
}
