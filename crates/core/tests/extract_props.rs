//! Property tests over the pure pipeline stages.

use mdcarve_core::extract::boundary::resolve;
use mdcarve_core::extract::splice::splice_source;
use mdcarve_core::extract::{ExtractMode, Selection};
use mdcarve_core::heading::{is_heading_line, parse};
use proptest::prelude::*;

/// Lines a generated document may contain. No fence markers here; the
/// fence properties add those deliberately.
fn content_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("plain text".to_string()),
        Just("- a list item".to_string()),
        Just("#nospace".to_string()),
        Just("# Alpha".to_string()),
        Just("## Beta".to_string()),
        Just("### Gamma".to_string()),
        Just("#### Delta".to_string()),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(content_line(), 0..24).prop_map(|lines| {
        let mut doc = lines.join("\n");
        if !doc.is_empty() {
            doc.push('\n');
        }
        doc
    })
}

proptest! {
    #[test]
    fn parsed_nodes_are_ordered_and_textually_headings(doc in document()) {
        let headings = parse(&doc);
        let lines: Vec<&str> = doc.lines().collect();
        let mut last_line = None;
        for h in &headings {
            prop_assert!((1..=6).contains(&h.depth));
            prop_assert!(last_line.map_or(true, |l| h.line > l), "out of order");
            prop_assert!(is_heading_line(lines[h.line]));
            last_line = Some(h.line);
        }
    }

    #[test]
    fn nothing_after_an_unterminated_fence_is_a_heading(
        before in prop::collection::vec(content_line(), 0..12),
        after in prop::collection::vec(content_line(), 0..12),
    ) {
        let mut lines = before.clone();
        lines.push("```".to_string());
        lines.extend(after);
        let mut doc = lines.join("\n");
        doc.push('\n');

        let fence_line = before.len();
        let headings = parse(&doc);
        for h in &headings {
            prop_assert!(
                h.line < fence_line,
                "heading at line {} leaked out of the open fence at line {}",
                h.line,
                fence_line
            );
        }
    }

    #[test]
    fn recursive_span_contains_heading_span(doc in document(), cursor in 0usize..256) {
        let plain = resolve(&doc, ExtractMode::Heading, Selection::caret(cursor));
        let rec = resolve(&doc, ExtractMode::HeadingRecursive, Selection::caret(cursor));
        match (plain, rec) {
            (Ok(p), Ok(r)) => {
                prop_assert_eq!(p.start, r.start);
                prop_assert!(r.end >= p.end);
            }
            (Err(p), Err(r)) => prop_assert_eq!(p, r),
            (p, r) => prop_assert!(false, "modes disagree: {:?} vs {:?}", p, r),
        }
    }

    #[test]
    fn deleting_a_section_never_piles_up_blank_lines(doc in document(), cursor in 0usize..256) {
        let Ok(span) = resolve(&doc, ExtractMode::Heading, Selection::caret(cursor)) else {
            return Ok(());
        };
        let out = splice_source(&doc, &span, "");

        // The splice may only ever reduce blank-line runs.
        let runs = |s: &str| s.matches("\n\n\n").count();
        prop_assert!(runs(&out) <= runs(&doc));
    }

    #[test]
    fn splice_with_marker_is_exact_concatenation(doc in document(), cursor in 0usize..256) {
        let Ok(span) = resolve(&doc, ExtractMode::Heading, Selection::caret(cursor)) else {
            return Ok(());
        };
        let out = splice_source(&doc, &span, "[[Dest]]\n");
        let expected =
            format!("{}[[Dest]]\n{}", &doc[..span.start], &doc[span.end..]);
        prop_assert_eq!(out, expected);
    }
}
