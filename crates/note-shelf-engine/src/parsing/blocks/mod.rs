//! # Block Parsing
//!
//! Two-phase block parsing over preprocessed text (code fences already
//! swapped for placeholder tokens).
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its raw
//!    text into a `LineClass` (blank, placeholder, heading, rule, quote, list
//!    item or text) with the span of the content that inline parsing will see.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` merges
//!    line-adjacent quote lines, same-kind list items and text lines into
//!    blocks; blank lines close whatever is open.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`
//! - **`kinds`**: block types owning their delimiters (CodeFence, Heading,
//!   ThematicBreak, BlockQuote, ListItem, Paragraph)
//! - **`open`**: `try_open_leaf` dispatch in precedence order
//! - **`classify`**: `MarkdownLineClassifier`
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Detection is anchored at column 0; a block line interrupts a paragraph
//!   without needing a blank line first
//! - Placeholder lines are opaque and always form their own block
//! - All block nodes store byte spans into the preprocessed text

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
