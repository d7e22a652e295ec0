/// A heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingNode {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Title text (trimmed, closing hash sequence stripped).
    pub title: String,
    /// Zero-based line index of the heading line.
    pub line: usize,
}
