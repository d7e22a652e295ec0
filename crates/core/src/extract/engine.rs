use tracing::debug;

use crate::config::ExtractConfig;
use crate::extract::types::{
    ExtractError, ExtractMode, ExtractOutcome, Selection,
};
use crate::extract::{boundary, replacement, splice};

/// High-level API for moving content between documents.
///
/// Each call is synchronous and stateless: it runs against caller-owned
/// snapshots of both documents and returns the rewritten texts without
/// touching anything. Persisting the results, navigating the view and
/// picking the destination belong to the caller.
pub struct Extractor;

impl Extractor {
    /// Extract the current selection.
    ///
    /// # Errors
    /// * `NoExtractableContent` - the selection is empty
    pub fn extract_selection(
        source: &str,
        selection: Selection,
        destination: &str,
        dest_name: &str,
        cfg: &ExtractConfig,
    ) -> Result<ExtractOutcome, ExtractError> {
        Self::run(source, ExtractMode::Selection, selection, destination, dest_name, cfg)
    }

    /// Extract the section of the nearest heading at or above `cursor`.
    ///
    /// # Errors
    /// * `NoHeadingAtCursor` - no heading exists at or above the cursor
    pub fn extract_heading(
        source: &str,
        cursor: usize,
        destination: &str,
        dest_name: &str,
        cfg: &ExtractConfig,
    ) -> Result<ExtractOutcome, ExtractError> {
        Self::run(
            source,
            ExtractMode::Heading,
            Selection::caret(cursor),
            destination,
            dest_name,
            cfg,
        )
    }

    /// Extract the section of the nearest heading at or above `cursor`,
    /// including its nested sub-headings.
    ///
    /// Hosts gate this command on the cursor sitting literally on a
    /// heading line (see [`crate::heading::is_heading_line`]); the
    /// engine itself only needs an enclosing heading.
    ///
    /// # Errors
    /// * `NoHeadingAtCursor` - no heading exists at or above the cursor
    pub fn extract_heading_recursive(
        source: &str,
        cursor: usize,
        destination: &str,
        dest_name: &str,
        cfg: &ExtractConfig,
    ) -> Result<ExtractOutcome, ExtractError> {
        Self::run(
            source,
            ExtractMode::HeadingRecursive,
            Selection::caret(cursor),
            destination,
            dest_name,
            cfg,
        )
    }

    fn run(
        source: &str,
        mode: ExtractMode,
        selection: Selection,
        destination: &str,
        dest_name: &str,
        cfg: &ExtractConfig,
    ) -> Result<ExtractOutcome, ExtractError> {
        let span = boundary::resolve(source, mode, selection)?;
        debug!(start = span.start, end = span.end, ?mode, "resolved extraction span");

        let extracted = &source[span.start..span.end];
        let eol = splice::line_ending(source);
        let rep =
            replacement::synthesize(extracted, span.heading.as_ref(), dest_name, eol, cfg);

        let new_source = splice::splice_source(source, &span, &rep.source_text);
        let (new_destination, insertion_offset) =
            splice::append_to_destination(destination, &rep.insertion_text);
        debug!(insertion_offset, "spliced source and destination");

        Ok(ExtractOutcome { new_source, new_destination, span, insertion_offset })
    }
}
