//! ATX heading scanning.
//!
//! This module provides:
//! - A line-based heading parser that is aware of fenced code blocks
//! - A purely textual heading predicate for host-side command checks

pub mod parser;
pub mod types;

pub use parser::{is_heading_line, parse};
pub use types::HeadingNode;
