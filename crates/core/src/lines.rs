//! Byte-offset line index over a flat text buffer.

use std::ops::Range;

/// Byte ranges of every line in a document, newline included.
///
/// Built once per extraction call; documents are never retained.
#[derive(Debug)]
pub struct LineIndex {
    spans: Vec<Range<usize>>,
    total: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                spans.push(start..i + 1);
                start = i + 1;
            }
        }
        if start < text.len() {
            // Final line without a trailing newline.
            spans.push(start..text.len());
        }
        Self { spans, total: text.len() }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Byte offset where `line` starts; the document length when `line`
    /// is past the last line.
    pub fn start(&self, line: usize) -> usize {
        self.spans.get(line).map_or(self.total, |s| s.start)
    }

    /// Zero-based line containing the byte `offset` (clamped to the
    /// last line; 0 for an empty document).
    pub fn line_at(&self, offset: usize) -> usize {
        if self.spans.is_empty() {
            return 0;
        }
        match self.spans.binary_search_by(|s| {
            if offset < s.start {
                std::cmp::Ordering::Greater
            } else if offset >= s.end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        }) {
            Ok(line) => line,
            Err(_) => self.spans.len() - 1,
        }
    }
}
