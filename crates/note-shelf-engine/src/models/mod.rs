pub mod catalog;
pub mod content_type;

pub use catalog::{NoteCatalog, NoteCategory, NoteEntry};
pub use content_type::ContentType;
