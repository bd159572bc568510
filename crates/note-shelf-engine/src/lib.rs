pub mod io;
pub mod models;
pub mod parsing;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{ContentType, NoteCatalog, NoteCategory, NoteEntry};
pub use parsing::render_markdown;
pub use view::*;
