//! Moving a region of one markdown document into another.
//!
//! The pipeline has four pure stages:
//! - `boundary` decides the exact byte span to remove
//! - `replacement` computes the marker left behind and the text to insert
//! - `splice` applies both edits to in-memory text
//! - `engine` sequences the stages behind three entry points
//!
//! Nothing here performs I/O; callers own persistence and navigation.

pub mod boundary;
pub mod engine;
pub mod replacement;
pub mod splice;
pub mod types;

pub use engine::Extractor;
pub use types::{ExtractError, ExtractMode, ExtractOutcome, ExtractionSpan, Selection};
