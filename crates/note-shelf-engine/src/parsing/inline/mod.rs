//! # Inline Parsing
//!
//! Cursor-based inline parsing over the content of one line (heading text,
//! quote line, list item or paragraph line).
//!
//! ## Architecture
//!
//! The parser walks the line once. At each position it tries the constructs
//! in precedence order and takes the first that closes; anything unclosed is
//! left as text. Strong, emphasis and link text are parsed recursively.
//!
//! - Code spans are raw zones: nothing is parsed inside them
//! - Links keep their URL out of reach of emphasis rules
//! - Strong (`**`, `__`) is tried before emphasis (`*`, `_`)
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum
//! - **`kinds`**: inline types owning their delimiters (CodeSpan, Link, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
