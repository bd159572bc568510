//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` ` `` - raw zone that suppresses other parsing
//! - **`Link`**: `[`, `](`, `)` and the accepted URL schemes
//! - **`Emphasis`**: `**`/`__` strong and `*`/`_` emphasis delimiters
//!
//! The parser uses these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
