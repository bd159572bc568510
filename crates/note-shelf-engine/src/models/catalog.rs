use serde::{Deserialize, Serialize};

use super::ContentType;

/// A note as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    /// File name relative to the notes directory, e.g. `Queue.md`.
    pub filename: String,
    /// Display title.
    pub title: String,
}

impl NoteEntry {
    const SLUG_EXTENSIONS: [&'static str; 2] = [".md", ".txt"];

    pub fn new(filename: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
        }
    }

    /// The file name without a trailing `.md` or `.txt` (case-insensitive).
    pub fn slug(&self) -> &str {
        let lower = self.filename.to_ascii_lowercase();
        Self::SLUG_EXTENSIONS
            .iter()
            .find(|ext| lower.ends_with(*ext))
            .map_or(self.filename.as_str(), |ext| {
                &self.filename[..self.filename.len() - ext.len()]
            })
    }

    pub fn content_type(&self) -> ContentType {
        ContentType::from_filename(&self.filename)
    }

    /// True if `needle` (already trimmed and lowercased) names this note by
    /// file name, slug or title.
    fn is_named(&self, needle: &str) -> bool {
        self.filename.to_lowercase() == needle
            || self.slug().to_lowercase() == needle
            || self.title.to_lowercase() == needle
    }
}

/// A titled group of notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCategory {
    pub title: String,
    #[serde(default)]
    pub notes: Vec<NoteEntry>,
}

/// The ordered set of note categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCatalog {
    categories: Vec<NoteCategory>,
}

impl NoteCatalog {
    pub fn new(categories: Vec<NoteCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[NoteCategory] {
        &self.categories
    }

    /// All notes, flattened in category order.
    pub fn notes(&self) -> impl Iterator<Item = &NoteEntry> {
        self.categories.iter().flat_map(|c| c.notes.iter())
    }

    pub fn len(&self) -> usize {
        self.notes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.notes().next().is_none()
    }

    /// Finds a note by file name, slug or title, ignoring case and
    /// surrounding whitespace.
    ///
    /// An absent or blank identifier, or one that names no note, falls back
    /// to the first note. Only an empty catalog yields `None`.
    pub fn resolve(&self, identifier: Option<&str>) -> Option<&NoteEntry> {
        let needle = identifier
            .map(|id| id.trim().to_lowercase())
            .filter(|id| !id.is_empty());

        if let Some(needle) = needle {
            if let Some(found) = self.notes().find(|n| n.is_named(&needle)) {
                return Some(found);
            }
            log::debug!("no note named {needle:?}, falling back to the first note");
        }
        self.notes().next()
    }
}
