//! HTML fragments for the note viewer: note bodies, error views and the
//! category list. Everything that came from the catalog or a plain-text note
//! is escaped here; Markdown bodies go through [`render_markdown`].

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::io::LoadedNote;
use crate::models::{ContentType, NoteCatalog};
use crate::parsing::render_markdown;

/// Footer text used when the configuration does not set one.
pub const DEFAULT_LAST_UPDATED_LABEL: &str = "Last updated";

/// Expand/collapse indicator shown after each category title.
pub const CATEGORY_CHEVRON: &str =
    r#"<img src="assets/images/chevron_right.svg" alt="Expand" class="category-chevron" width="16" height="16">"#;

/// Renders the viewer body for a loaded note, footer included.
pub fn render_note_body(note: &LoadedNote, label: &str) -> String {
    let footer = render_footer(note.last_modified.as_deref(), label);
    match note.content_type {
        ContentType::Markdown => format!(
            r#"<div class="note-content markdown-content">{}</div>{footer}"#,
            render_markdown(&note.content)
        ),
        ContentType::PlainText => format!(
            r#"<pre class="note-content text-content"><code class="language-text">{}</code></pre>{footer}"#,
            encode_text(&note.content)
        ),
    }
}

/// The "last updated" badge, or nothing when the date is unknown.
pub fn render_footer(date: Option<&str>, label: &str) -> String {
    let Some(date) = date else {
        return String::new();
    };
    format!(
        r#"<div class="note-footer"><span class="last-updated-badge">{} {}</span></div>"#,
        encode_text(label),
        encode_text(date)
    )
}

/// Error view shown in place of a note that failed to load.
pub fn render_error(title: &str, message: &str) -> String {
    format!(
        concat!(
            r#"<div class="error-message">"#,
            r#"<p class="error-detail">{}</p>"#,
            r#"<p class="note-placeholder">Placeholder for <strong>{}</strong>. "#,
            r#"Content is loaded from the matching .md or .txt file.</p>"#,
            "</div>"
        ),
        encode_text(message),
        encode_text(title)
    )
}

/// Static HTML for the category tree, every category expanded.
pub fn render_category_list(catalog: &NoteCatalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        out.push_str(r#"<div class="note-category expanded">"#);
        out.push_str(r#"<div class="category-header"><div class="category-title">"#);
        out.push_str(r#"<span class="category-title-text">"#);
        out.push_str(&encode_text(&category.title));
        out.push_str("</span>");
        out.push_str(CATEGORY_CHEVRON);
        out.push_str("</div></div>");

        out.push_str(r#"<ul class="note-list">"#);
        for note in &category.notes {
            out.push_str(r#"<li class="note-item"><span class="note-title" note=""#);
            out.push_str(&encode_double_quoted_attribute(&note.filename));
            out.push_str(r#"">"#);
            out.push_str(&encode_text(&note.title));
            out.push_str("</span></li>");
        }
        out.push_str("</ul></div>");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteCategory, NoteEntry};
    use crate::tests::sample_catalog;
    use pretty_assertions::assert_eq;

    fn note(filename: &str, content: &str, last_modified: Option<&str>) -> LoadedNote {
        LoadedNote {
            filename: filename.to_string(),
            content: content.to_string(),
            content_type: ContentType::from_filename(filename),
            last_modified: last_modified.map(str::to_string),
        }
    }

    #[test]
    fn markdown_body_with_footer() {
        let html = render_note_body(&note("a.md", "# Hi", Some("2024/03/09")), "Last updated");
        assert_eq!(
            html,
            concat!(
                r#"<div class="note-content markdown-content"><h1>Hi</h1></div>"#,
                r#"<div class="note-footer"><span class="last-updated-badge">Last updated 2024/03/09</span></div>"#
            )
        );
    }

    #[test]
    fn plain_text_body_is_escaped() {
        let html = render_note_body(&note("q.txt", "a < b & **c**", None), "Last updated");
        assert_eq!(
            html,
            r#"<pre class="note-content text-content"><code class="language-text">a &lt; b &amp; **c**</code></pre>"#
        );
    }

    #[test]
    fn footer_omitted_without_date() {
        assert_eq!(render_footer(None, "Last updated"), "");
    }

    #[test]
    fn footer_uses_label() {
        assert_eq!(
            render_footer(Some("2023/12/01"), "Updated"),
            r#"<div class="note-footer"><span class="last-updated-badge">Updated 2023/12/01</span></div>"#
        );
    }

    #[test]
    fn error_view_escapes_message_and_title() {
        let html = render_error("A<B", "File not found: <x>.md");
        assert!(html.starts_with(r#"<div class="error-message">"#));
        assert!(html.contains(r#"<p class="error-detail">File not found: &lt;x&gt;.md</p>"#));
        assert!(html.contains("<strong>A&lt;B</strong>"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn category_list_structure() {
        let catalog = NoteCatalog::new(vec![NoteCategory {
            title: "Algorithms".to_string(),
            notes: vec![NoteEntry::new("Queue.txt", "Queues & Deques")],
        }]);
        assert_eq!(
            render_category_list(&catalog),
            concat!(
                r#"<div class="note-category expanded">"#,
                r#"<div class="category-header"><div class="category-title">"#,
                r#"<span class="category-title-text">Algorithms</span>"#,
                r#"<img src="assets/images/chevron_right.svg" alt="Expand" class="category-chevron" width="16" height="16">"#,
                "</div></div>",
                r#"<ul class="note-list">"#,
                r#"<li class="note-item"><span class="note-title" note="Queue.txt">Queues &amp; Deques</span></li>"#,
                "</ul></div>"
            )
        );
    }

    #[test]
    fn category_list_covers_every_note() {
        let html = render_category_list(&sample_catalog());
        assert_eq!(html.matches(r#"class="note-category expanded""#).count(), 2);
        assert_eq!(html.matches(r#"class="note-item""#).count(), 5);
        assert_eq!(html.matches(CATEGORY_CHEVRON).count(), 2);
    }

    #[test]
    fn empty_catalog_renders_nothing() {
        assert_eq!(render_category_list(&NoteCatalog::default()), "");
    }
}
