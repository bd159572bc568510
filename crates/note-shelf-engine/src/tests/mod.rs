use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::{NoteCatalog, NoteCategory, NoteEntry};

/// Create a temporary notes directory with test files
pub fn create_test_notes_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test note file with content
pub fn create_test_file(notes_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = notes_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Two categories, five notes, mixing Markdown and plain text
pub fn sample_catalog() -> NoteCatalog {
    NoteCatalog::new(vec![
        NoteCategory {
            title: "Algorithms".to_string(),
            notes: vec![
                NoteEntry::new("Algorithm.md", "Problem Solving"),
                NoteEntry::new("Binary_Search.md", "Binary Search"),
                NoteEntry::new("Queue.txt", "Queues & Deques"),
            ],
        },
        NoteCategory {
            title: "Systems".to_string(),
            notes: vec![
                NoteEntry::new("Backend.md", "Backend Integration"),
                NoteEntry::new("Email.md", "Email Service Design"),
            ],
        },
    ])
}
