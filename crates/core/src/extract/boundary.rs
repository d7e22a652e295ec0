//! Span resolution: from a cursor or selection to the exact byte range
//! the extraction removes.

use crate::extract::types::{ExtractError, ExtractMode, ExtractionSpan, Selection};
use crate::heading;
use crate::lines::LineIndex;

/// Resolve the extraction span for `mode`.
///
/// Selection mode takes the literal offsets. Heading modes anchor on
/// the nearest heading at or above the cursor's line: the span runs
/// from the heading line up to (excluding) the next heading line - of
/// any depth for [`ExtractMode::Heading`], of equal-or-shallower depth
/// for [`ExtractMode::HeadingRecursive`] - or to end of document.
///
/// Offsets out of range are clamped to the document length.
pub fn resolve(
    text: &str,
    mode: ExtractMode,
    selection: Selection,
) -> Result<ExtractionSpan, ExtractError> {
    match mode {
        ExtractMode::Selection => resolve_selection(text, selection),
        ExtractMode::Heading | ExtractMode::HeadingRecursive => {
            resolve_heading(text, mode, selection)
        }
    }
}

fn resolve_selection(
    text: &str,
    selection: Selection,
) -> Result<ExtractionSpan, ExtractError> {
    let start = snap_to_char_boundary(text, selection.start());
    let end = snap_to_char_boundary(text, selection.end());
    if start == end {
        return Err(ExtractError::NoExtractableContent);
    }
    Ok(ExtractionSpan { start, end, heading: None })
}

/// Clamp `offset` to the document and move it back onto a UTF-8 char
/// boundary, so selection spans always slice cleanly.
fn snap_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

fn resolve_heading(
    text: &str,
    mode: ExtractMode,
    selection: Selection,
) -> Result<ExtractionSpan, ExtractError> {
    let index = LineIndex::new(text);
    let cursor_line = index.line_at(selection.anchor.min(text.len()));

    let headings = heading::parse(text);
    let pos = headings
        .iter()
        .rposition(|h| h.line <= cursor_line)
        .ok_or(ExtractError::NoHeadingAtCursor)?;
    let current = &headings[pos];

    let end_line = match mode {
        // The heading's own section stops at the very next heading.
        ExtractMode::Heading => headings.get(pos + 1).map(|h| h.line),
        // Sub-headings of greater depth belong to the section.
        ExtractMode::HeadingRecursive => headings[pos + 1..]
            .iter()
            .find(|h| h.depth <= current.depth)
            .map(|h| h.line),
        ExtractMode::Selection => unreachable!("handled by resolve_selection"),
    }
    .unwrap_or_else(|| index.len());

    Ok(ExtractionSpan {
        start: index.start(current.line),
        end: index.start(end_line),
        heading: Some(current.clone()),
    })
}
