use mdcarve_core::extract::boundary::resolve;
use mdcarve_core::extract::{ExtractError, ExtractMode, Selection};

const DOC: &str = "# A\nfoo\n## B\nbar\n# C\nbaz\n";

#[test]
fn selection_span_is_literal() {
    let span = resolve(DOC, ExtractMode::Selection, Selection::new(4, 7)).unwrap();
    assert_eq!(&DOC[span.start..span.end], "foo");
    assert!(span.heading.is_none());
}

#[test]
fn selection_offsets_may_be_reversed() {
    let span = resolve(DOC, ExtractMode::Selection, Selection::new(7, 4)).unwrap();
    assert_eq!((span.start, span.end), (4, 7));
}

#[test]
fn empty_selection_is_rejected() {
    let err = resolve(DOC, ExtractMode::Selection, Selection::caret(5)).unwrap_err();
    assert_eq!(err, ExtractError::NoExtractableContent);
}

#[test]
fn selection_out_of_range_is_clamped() {
    let span = resolve(DOC, ExtractMode::Selection, Selection::new(21, 999)).unwrap();
    assert_eq!(&DOC[span.start..span.end], "baz\n");
}

#[test]
fn selection_offsets_snap_to_char_boundaries() {
    // 'é' spans bytes 2..4; offsets landing inside it move back onto
    // the boundary instead of slicing mid-character.
    let doc = "x énd\n";
    let span = resolve(doc, ExtractMode::Selection, Selection::new(3, 5)).unwrap();
    assert_eq!((span.start, span.end), (2, 5));
    assert_eq!(&doc[span.start..span.end], "én");
}

#[test]
fn selection_collapsed_inside_a_char_is_rejected() {
    let err =
        resolve("x énd\n", ExtractMode::Selection, Selection::new(3, 3)).unwrap_err();
    assert_eq!(err, ExtractError::NoExtractableContent);
}

#[test]
fn heading_mode_from_inside_section() {
    // Cursor on the "bar" line, inside ## B's section.
    let span = resolve(DOC, ExtractMode::Heading, Selection::caret(14)).unwrap();
    assert_eq!(&DOC[span.start..span.end], "## B\nbar\n");
    assert_eq!(span.heading.as_ref().unwrap().title, "B");
    assert_eq!(span.heading.as_ref().unwrap().depth, 2);
}

#[test]
fn heading_mode_stops_at_next_heading_of_any_depth() {
    // Cursor on "foo": # A's own section ends where ## B starts.
    let span = resolve(DOC, ExtractMode::Heading, Selection::caret(5)).unwrap();
    assert_eq!(&DOC[span.start..span.end], "# A\nfoo\n");
}

#[test]
fn recursive_mode_includes_nested_subheadings() {
    let span = resolve(DOC, ExtractMode::HeadingRecursive, Selection::caret(0)).unwrap();
    assert_eq!(&DOC[span.start..span.end], "# A\nfoo\n## B\nbar\n");
    assert_eq!(span.heading.as_ref().unwrap().title, "A");
}

#[test]
fn recursive_span_covers_heading_span() {
    for cursor in 0..DOC.len() {
        let plain = resolve(DOC, ExtractMode::Heading, Selection::caret(cursor));
        let rec = resolve(DOC, ExtractMode::HeadingRecursive, Selection::caret(cursor));
        let (Ok(plain), Ok(rec)) = (plain, rec) else { continue };
        assert_eq!(rec.start, plain.start);
        assert!(rec.end >= plain.end, "cursor {cursor}");
    }
}

#[test]
fn last_heading_section_runs_to_eof() {
    let span = resolve(DOC, ExtractMode::Heading, Selection::caret(22)).unwrap();
    assert_eq!(&DOC[span.start..span.end], "# C\nbaz\n");
}

#[test]
fn section_of_document_without_trailing_newline() {
    let doc = "# A\nfoo";
    let span = resolve(doc, ExtractMode::Heading, Selection::caret(6)).unwrap();
    assert_eq!(&doc[span.start..span.end], "# A\nfoo");
}

#[test]
fn no_heading_above_cursor_fails() {
    let doc = "intro text\n# A\nbody\n";
    let err = resolve(doc, ExtractMode::Heading, Selection::caret(2)).unwrap_err();
    assert_eq!(err, ExtractError::NoHeadingAtCursor);
}

#[test]
fn document_without_headings_fails() {
    let err =
        resolve("just text\n", ExtractMode::Heading, Selection::caret(0)).unwrap_err();
    assert_eq!(err, ExtractError::NoHeadingAtCursor);
}

#[test]
fn empty_document_fails_heading_mode() {
    let err = resolve("", ExtractMode::Heading, Selection::caret(0)).unwrap_err();
    assert_eq!(err, ExtractError::NoHeadingAtCursor);
}

#[test]
fn fenced_lookalike_does_not_anchor_a_section() {
    let doc = "```\n# not real\n```\ntext\n";
    let err = resolve(doc, ExtractMode::Heading, Selection::caret(5)).unwrap_err();
    assert_eq!(err, ExtractError::NoHeadingAtCursor);
}

#[test]
fn heading_spans_are_line_aligned() {
    // Cursor mid-word still yields whole-line boundaries.
    let span = resolve(DOC, ExtractMode::Heading, Selection::caret(10)).unwrap();
    assert_eq!(span.start, 8);
    assert_eq!(span.end, 17);
}

#[test]
fn crlf_sections_resolve_cleanly() {
    let doc = "# A\r\nfoo\r\n## B\r\nbar\r\n";
    let span = resolve(doc, ExtractMode::Heading, Selection::caret(6)).unwrap();
    assert_eq!(&doc[span.start..span.end], "# A\r\nfoo\r\n");
}
