use note_shelf_engine::parsing::{parse_document, preprocess, render_markdown};

#[test]
fn fixture_queue_note() {
    assert_fixture("queue_note");
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    invariants(&md);

    let html = render_markdown(&md);
    insta::assert_snapshot!(name, html);
}

/// Structural checks that hold for any note.
fn invariants(md: &str) {
    let pre = preprocess(md);
    let doc = parse_document(&pre.text);

    // Block spans are ordered, non-overlapping and inside the text
    let mut last_end = 0;
    for block in &doc.blocks {
        assert!(block.span.start >= last_end, "overlapping block {block:?}");
        assert!(block.span.end <= pre.text.len());
        assert!(!block.lines.is_empty());
        last_end = block.span.end;
    }

    // Every extracted block is restored and no token survives
    let html = render_markdown(md);
    for block in pre.blocks.iter() {
        assert!(html.contains(&block.html));
    }
    assert!(!html.contains('\u{E000}'));
    assert!(!html.contains('\u{E001}'));
}

#[test]
fn crlf_note_renders_like_lf() {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/queue_note.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let crlf = md.replace('\n', "\r\n");
    assert_eq!(render_markdown(&crlf), render_markdown(&md));
}
