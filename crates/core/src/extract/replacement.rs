//! Marker synthesis: what stays in the source and what moves to the
//! destination.

use crate::config::{ExtractConfig, ReplacementPolicy};
use crate::heading::HeadingNode;

/// Texts produced for the two documents. Pure data; the splice engine
/// applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Left in the source where the span was.
    pub source_text: String,
    /// Appended to the destination.
    pub insertion_text: String,
}

/// Compute both texts for an extracted span.
///
/// `dest_name` is the destination's display name (file stem), used as
/// the wikilink target. `eol` is the source document's line ending.
pub fn synthesize(
    extracted: &str,
    heading: Option<&HeadingNode>,
    dest_name: &str,
    eol: &str,
    cfg: &ExtractConfig,
) -> Replacement {
    let insertion_text = if heading.is_some() && !cfg.keep_heading {
        strip_first_line(extracted).to_string()
    } else {
        extracted.to_string()
    };

    let source_text = match cfg.replacement {
        ReplacementPolicy::None => String::new(),
        ReplacementPolicy::Link => render_marker(heading, dest_name, eol, cfg, false),
        ReplacementPolicy::Embed => render_marker(heading, dest_name, eol, cfg, true),
    };

    Replacement { source_text, insertion_text }
}

fn render_marker(
    heading: Option<&HeadingNode>,
    dest_name: &str,
    eol: &str,
    cfg: &ExtractConfig,
    embed: bool,
) -> String {
    // Linking to the destination heading only makes sense when the
    // heading line actually lands in the destination.
    let target_heading =
        heading.filter(|_| cfg.link_to_dest_heading && cfg.keep_heading);

    let link = match target_heading {
        Some(h) => {
            let alias =
                if cfg.use_heading_as_alias { h.title.as_str() } else { dest_name };
            format!("[[{dest_name}#{title}|{alias}]]", title = h.title)
        }
        None => format!("[[{dest_name}]]"),
    };

    let marker = if embed { format!("!{link}") } else { link };

    // Heading spans are whole lines, so the marker takes a line of its
    // own; selection markers sit inline.
    if heading.is_some() {
        format!("{marker}{eol}")
    } else {
        marker
    }
}

fn strip_first_line(text: &str) -> &str {
    match text.find('\n') {
        Some(i) => &text[i + 1..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractConfig;

    fn heading(depth: u8, title: &str) -> HeadingNode {
        HeadingNode { depth, title: title.to_string(), line: 0 }
    }

    #[test]
    fn link_to_kept_heading_uses_dest_name_alias() {
        let cfg = ExtractConfig::default();
        let rep =
            synthesize("## B\nbar\n", Some(&heading(2, "B")), "Note 2", "\n", &cfg);
        assert_eq!(rep.source_text, "[[Note 2#B|Note 2]]\n");
        assert_eq!(rep.insertion_text, "## B\nbar\n");
    }

    #[test]
    fn heading_title_alias_when_configured() {
        let cfg = ExtractConfig { use_heading_as_alias: true, ..Default::default() };
        let rep =
            synthesize("## B\nbar\n", Some(&heading(2, "B")), "Note 2", "\n", &cfg);
        assert_eq!(rep.source_text, "[[Note 2#B|B]]\n");
    }

    #[test]
    fn stripped_heading_falls_back_to_plain_link() {
        let cfg = ExtractConfig { keep_heading: false, ..Default::default() };
        let rep =
            synthesize("## B\nbar\n", Some(&heading(2, "B")), "Note 2", "\n", &cfg);
        assert_eq!(rep.source_text, "[[Note 2]]\n");
        assert_eq!(rep.insertion_text, "bar\n");
    }

    #[test]
    fn selection_marker_is_inline() {
        let cfg = ExtractConfig::default();
        let rep = synthesize("foo", None, "Note 2", "\n", &cfg);
        assert_eq!(rep.source_text, "[[Note 2]]");
        assert_eq!(rep.insertion_text, "foo");
    }

    #[test]
    fn embed_marker_prefixes_bang() {
        let cfg = ExtractConfig {
            replacement: ReplacementPolicy::Embed,
            ..Default::default()
        };
        let rep =
            synthesize("## B\nbar\n", Some(&heading(2, "B")), "Note 2", "\n", &cfg);
        assert_eq!(rep.source_text, "![[Note 2#B|Note 2]]\n");
    }

    #[test]
    fn none_policy_leaves_nothing() {
        let cfg = ExtractConfig {
            replacement: ReplacementPolicy::None,
            ..Default::default()
        };
        let rep = synthesize("foo", None, "Note 2", "\n", &cfg);
        assert!(rep.source_text.is_empty());
    }
}
