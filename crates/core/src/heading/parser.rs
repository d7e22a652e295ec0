//! Line-scanning ATX heading parser with fence tracking.

use std::sync::LazyLock;

use regex::Regex;

use crate::heading::types::HeadingNode;

// Matches an ATX heading: up to 3 spaces of indentation, 1-6 hashes,
// then at least one space/tab before the title.
static ATX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(#{1,6})[ \t]+(.*)$").unwrap());

/// State of an open code fence while scanning.
#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

/// Parse all ATX headings from a document, in line order.
///
/// Lines inside fenced code blocks are never headings. An unterminated
/// fence keeps every following line inside code until end of document.
pub fn parse(text: &str) -> Vec<HeadingNode> {
    let mut headings = Vec::new();
    let mut fence: Option<Fence> = None;

    for (idx, line) in text.lines().enumerate() {
        if let Some(open) = fence {
            if closes_fence(line, open) {
                fence = None;
            }
            continue;
        }

        if let Some(opened) = opens_fence(line) {
            fence = Some(opened);
            continue;
        }

        if let Some((depth, title)) = match_heading(line) {
            headings.push(HeadingNode { depth, title, line: idx });
        }
    }

    headings
}

/// Textual check: is this line an ATX heading?
///
/// Ignores fence context on purpose. Hosts use this to decide whether
/// heading commands are available at the cursor line; the resolver runs
/// a fence-aware parse before anything is extracted.
pub fn is_heading_line(line: &str) -> bool {
    ATX_RE.is_match(line)
}

fn match_heading(line: &str) -> Option<(u8, String)> {
    let caps = ATX_RE.captures(line)?;
    let depth = caps.get(1).map_or(0, |m| m.as_str().len()) as u8;
    let title = strip_closing_hashes(caps.get(2).map_or("", |m| m.as_str()));
    Some((depth, title))
}

/// Strip an ATX closing sequence (` ###`) from a heading title.
/// A trailing hash run only closes the heading when it stands alone or
/// is separated from the title by whitespace, so "C#" survives.
fn strip_closing_hashes(raw: &str) -> String {
    let trimmed = raw.trim();
    let without = trimmed.trim_end_matches('#');
    if without.len() == trimmed.len() {
        return trimmed.to_string();
    }
    if without.is_empty() || without.ends_with(' ') || without.ends_with('\t') {
        return without.trim_end().to_string();
    }
    trimmed.to_string()
}

fn opens_fence(line: &str) -> Option<Fence> {
    let trimmed = line.trim_start();
    let marker = trimmed.chars().next()?;
    if marker != '`' && marker != '~' {
        return None;
    }
    let len = trimmed.chars().take_while(|&c| c == marker).count();
    if len < 3 {
        return None;
    }
    // A backtick fence's info string must not contain a backtick.
    let info = &trimmed[len..];
    if marker == '`' && info.contains('`') {
        return None;
    }
    Some(Fence { marker, len })
}

fn closes_fence(line: &str, open: Fence) -> bool {
    let trimmed = line.trim();
    let len = trimmed.chars().take_while(|&c| c == open.marker).count();
    len >= open.len && trimmed.chars().all(|c| c == open.marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_depths_and_titles() {
        let text = "# One\nbody\n### Three\n";
        let headings = parse(text);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].depth, 1);
        assert_eq!(headings[0].title, "One");
        assert_eq!(headings[0].line, 0);
        assert_eq!(headings[1].depth, 3);
        assert_eq!(headings[1].line, 2);
    }

    #[test]
    fn requires_space_after_hashes() {
        assert!(parse("#tag\n").is_empty());
        assert!(is_heading_line("# ok"));
        assert!(!is_heading_line("#nope"));
    }

    #[test]
    fn rejects_seven_hashes() {
        assert!(parse("####### too deep\n").is_empty());
    }

    #[test]
    fn strips_closing_sequence() {
        let headings = parse("## Title ##\n# C#\n");
        assert_eq!(headings[0].title, "Title");
        assert_eq!(headings[1].title, "C#");
    }

    #[test]
    fn skips_headings_inside_fences() {
        let text = "# Real\n```\n# not a heading\n```\n# Also real\n";
        let headings = parse(text);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].title, "Real");
        assert_eq!(headings[1].title, "Also real");
    }

    #[test]
    fn unterminated_fence_swallows_rest() {
        let text = "# Real\n~~~\n# shadowed\n## shadowed too\n";
        let headings = parse(text);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].title, "Real");
    }

    #[test]
    fn tilde_fence_not_closed_by_backticks() {
        let text = "~~~\n```\n# still code\n~~~\n# after\n";
        let headings = parse(text);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].title, "after");
    }

    #[test]
    fn handles_crlf_lines() {
        let headings = parse("# One\r\nbody\r\n## Two\r\n");
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].title, "Two");
    }
}
