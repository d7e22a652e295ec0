use thiserror::Error;

use crate::heading::HeadingNode;

/// A cursor or selection over the flat document text, in byte offsets.
///
/// Editor-specific cursor objects reduce to this pair; a caret is a
/// selection whose ends coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A collapsed selection at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self { anchor: offset, head: offset }
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// What anchors the extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// The literal selection, possibly mid-line.
    Selection,
    /// The current heading's own section, up to the next heading.
    Heading,
    /// The current heading's section including nested sub-headings.
    HeadingRecursive,
}

/// The byte range removed from the source document.
///
/// `start <= end <= source.len()`. Heading-based spans are aligned to
/// whole lines; selection spans are literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSpan {
    pub start: usize,
    pub end: usize,
    /// The heading anchoring the span, for heading-based modes.
    pub heading: Option<HeadingNode>,
}

/// Result of a completed extraction: both rewritten documents plus
/// where the moved content begins in the destination.
#[derive(Debug, Clone)]
pub struct ExtractOutcome {
    pub new_source: String,
    pub new_destination: String,
    pub span: ExtractionSpan,
    /// Byte offset in `new_destination` where the inserted content
    /// starts, for cursor placement after navigation.
    pub insertion_offset: usize,
}

/// Precondition failures. Every other stage of the pipeline is a total
/// function over well-formed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("nothing is selected")]
    NoExtractableContent,

    #[error("no heading found at or above the cursor")]
    NoHeadingAtCursor,
}
