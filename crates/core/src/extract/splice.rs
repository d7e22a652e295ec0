//! Pure text splicing for both documents.
//!
//! String-based edits that preserve the surrounding formatting: the
//! source keeps its line-ending style and never gains stray blank
//! lines; the destination gains a blank-line separator before appended
//! content and keeps its trailing-newline convention.

use crate::extract::types::ExtractionSpan;

/// Dominant line ending of a document.
pub fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Replace `span` in `source` with `replacement`.
///
/// When the replacement is empty the splice point is collapsed to at
/// most one blank line (none at the very start or end of the document).
pub fn splice_source(source: &str, span: &ExtractionSpan, replacement: &str) -> String {
    let prefix = &source[..span.start];
    let suffix = &source[span.end..];

    if !replacement.is_empty() {
        let mut out = String::with_capacity(prefix.len() + replacement.len() + suffix.len());
        out.push_str(prefix);
        out.push_str(replacement);
        out.push_str(suffix);
        return out;
    }

    let eol = line_ending(source);
    let (body_before, before_units) = split_trailing_newlines(prefix);
    let (body_after, after_units) = split_leading_newlines(suffix);

    let total = before_units + after_units;
    let keep = if body_before.is_empty() {
        0
    } else if body_after.is_empty() {
        total.min(1)
    } else {
        total.min(2)
    };

    let mut out =
        String::with_capacity(body_before.len() + keep * eol.len() + body_after.len());
    out.push_str(body_before);
    for _ in 0..keep {
        out.push_str(eol);
    }
    out.push_str(body_after);
    out
}

/// Append `insertion` to `destination`.
///
/// Returns the new text and the byte offset where the inserted content
/// begins. A non-empty destination that does not already end with a
/// blank line gets one as a separator first.
pub fn append_to_destination(destination: &str, insertion: &str) -> (String, usize) {
    if insertion.is_empty() {
        return (destination.to_string(), destination.len());
    }
    if destination.is_empty() {
        return (insertion.to_string(), 0);
    }

    let eol = line_ending(destination);
    let had_final_newline = destination.ends_with('\n');
    let (_, trailing) = split_trailing_newlines(destination);

    let mut out = String::with_capacity(destination.len() + insertion.len() + 2 * eol.len());
    out.push_str(destination);
    // One newline terminates the last line, a second makes the blank
    // separator line.
    for _ in trailing..2 {
        out.push_str(eol);
    }
    let offset = out.len();
    out.push_str(insertion);

    // Keep the destination's trailing-newline convention.
    if had_final_newline && !out.ends_with('\n') {
        out.push_str(eol);
    } else if !had_final_newline && out.ends_with('\n') {
        truncate_trailing_newline(&mut out);
    }

    (out, offset)
}

/// Split off trailing newline units ("\n" or "\r\n"), returning the
/// remaining prefix and how many units were removed.
fn split_trailing_newlines(text: &str) -> (&str, usize) {
    let mut end = text.len();
    let mut units = 0;
    loop {
        if text[..end].ends_with("\r\n") {
            end -= 2;
        } else if text[..end].ends_with('\n') {
            end -= 1;
        } else {
            break;
        }
        units += 1;
    }
    (&text[..end], units)
}

fn split_leading_newlines(text: &str) -> (&str, usize) {
    let mut start = 0;
    let mut units = 0;
    loop {
        let rest = &text[start..];
        if rest.starts_with("\r\n") {
            start += 2;
        } else if rest.starts_with('\n') {
            start += 1;
        } else {
            break;
        }
        units += 1;
    }
    (&text[start..], units)
}

fn truncate_trailing_newline(text: &mut String) {
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    } else if text.ends_with('\n') {
        text.truncate(text.len() - 1);
    }
}
