pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    pub const TITLE_QUOTE: u8 = b'"';
    /// Only absolute web URLs are recognized.
    pub const SCHEMES: [&'static str; 2] = ["https://", "http://"];
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
}
