use chrono::{DateTime, Local, TimeZone};
use relative_path::RelativePath;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ContentType;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// A note read from disk, ready for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedNote {
    pub filename: String,
    pub content: String,
    pub content_type: ContentType,
    /// Modification date formatted as `YYYY/MM/DD`, when the platform reports one.
    pub last_modified: Option<String>,
}

/// File extensions listed by [`scan_note_files`].
pub const NOTE_EXTENSIONS: [&str; 2] = ["md", "txt"];

/// Read a note file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Load a note by file name: content, content type and last-modified date.
pub fn load_note(notes_root: &Path, filename: &str) -> Result<LoadedNote, IoError> {
    let relative_path = RelativePath::new(filename).normalize();
    let content = read_file(&relative_path, notes_root)?;
    let last_modified = modified_date(&relative_path.to_path(notes_root));
    log::debug!(
        "loaded note {filename} ({} bytes, modified {:?})",
        content.len(),
        last_modified
    );

    Ok(LoadedNote {
        filename: filename.to_string(),
        content,
        content_type: ContentType::from_filename(filename),
        last_modified,
    })
}

/// Formats a date the way the viewer footer shows it: `YYYY/MM/DD`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%Y/%m/%d").to_string()
}

fn modified_date(path: &Path) -> Option<String> {
    match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(time) => Some(format_date(&DateTime::<Local>::from(time))),
        Err(e) => {
            log::warn!("No modification time for {}: {e}", path.display());
            None
        }
    }
}

/// Scan for note files (`.md`, `.txt`) in the notes directory
pub fn scan_note_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && NOTE_EXTENSIONS.iter().any(|n| ext == *n)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_notes_dir};
    use chrono::Utc;

    #[test]
    fn test_scan_finds_markdown_and_text_notes() {
        // Given a notes directory with note files and other files
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "algo.md", "# Algo");
        create_test_file(&notes_dir, "queue.txt", "plain");
        create_test_file(&notes_dir, "image.png", "fake image data");
        create_test_file(&notes_dir, "config.json", "{}");

        // When scanning for files
        let files = scan_note_files(notes_dir.path()).unwrap();

        // Then only the notes are found, sorted
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["algo.md", "queue.txt"]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "root.md", "# Root file");

        let sub_dir = notes_dir.path().join("subfolder");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("nested.md"), "# Nested file").unwrap();

        let files = scan_note_files(notes_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.md"));
    }

    #[test]
    fn test_handle_invalid_notes_directory() {
        let result = scan_note_files(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("notes directory"));
    }

    #[test]
    fn test_validate_notes_dir() {
        let notes_dir = create_test_notes_dir();
        assert!(validate_notes_dir(notes_dir.path()).is_ok());
        assert!(matches!(
            validate_notes_dir(Path::new("/nonexistent/path")),
            Err(IoError::InvalidNotesDir(_))
        ));
    }

    #[test]
    fn test_validate_notes_dir_rejects_file() {
        let notes_dir = create_test_notes_dir();
        let file = create_test_file(&notes_dir, "a.md", "x");
        assert!(validate_notes_dir(&file).is_err());
    }

    #[test]
    fn test_read_file_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_file(RelativePath::new("nonexistent.md"), notes_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_markdown_note() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "Queue.md", "# Queue\r\n\r\nFIFO");

        let note = load_note(notes_dir.path(), "Queue.md").unwrap();

        assert_eq!(note.filename, "Queue.md");
        assert_eq!(note.content, "# Queue\r\n\r\nFIFO");
        assert_eq!(note.content_type, ContentType::Markdown);
        let date = note.last_modified.expect("mtime available on test filesystems");
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'/');
        assert_eq!(date.as_bytes()[7], b'/');
    }

    #[test]
    fn test_load_text_note() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "todo.txt", "<b>not markup</b>");

        let note = load_note(notes_dir.path(), "todo.txt").unwrap();
        assert_eq!(note.content_type, ContentType::PlainText);
    }

    #[test]
    fn test_load_missing_note() {
        let notes_dir = create_test_notes_dir();
        let err = load_note(notes_dir.path(), "Missing.md").unwrap_err();
        assert!(matches!(err, IoError::NotFound(_)));
        assert!(err.to_string().contains("Missing.md"));
    }

    #[test]
    fn test_load_note_in_subfolder() {
        let notes_dir = create_test_notes_dir();
        std::fs::create_dir(notes_dir.path().join("algo")).unwrap();
        std::fs::write(notes_dir.path().join("algo/heap.md"), "heap").unwrap();

        let note = load_note(notes_dir.path(), "algo/heap.md").unwrap();
        assert_eq!(note.content, "heap");
    }

    #[test]
    fn test_format_date_pads_fields() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(format_date(&date), "2024/03/09");
    }
}
