//! Preamble extraction for markdown cells.
//!
//! A notebook's first markdown cell can carry page front matter wrapped in an
//! HTML comment so that it stays invisible in Jupyter:
//!
//! ```text
//! <!--
//! ---
//! title: My post
//! ---
//! -->
//! # Heading
//! ```
//!
//! The comment wrapper is stripped and the content is emitted as-is, followed
//! by the KaTeX stylesheet import the published page needs for math.

use std::sync::LazyLock;

use regex::Regex;

/// Stylesheet import emitted after every extracted preamble.
pub const KATEX_IMPORT: &str = "import 'katex/dist/katex.min.css'";

/// Leading newlines, a `<!-- ... -->` block ending at the first `-->`, and
/// the whitespace after it.
static PREAMBLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A\n*(<!--.*?-->)\s*").unwrap());

/// A markdown cell split into its preamble and remaining source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preamble {
    /// Cell text with the preamble block removed
    pub source: String,
    /// Front matter plus the stylesheet import, or empty
    pub preamble: String,
}

/// Split a leading comment-wrapped preamble off a markdown cell.
///
/// Without a preamble the source is returned unchanged and the preamble is
/// empty.
pub fn extract_preamble(cell_source: &str) -> Preamble {
    let Some(captures) = PREAMBLE_RE.captures(cell_source) else {
        return Preamble {
            source: cell_source.to_string(),
            preamble: String::new(),
        };
    };

    let matched = captures.get(0).map_or(0, |m| m.end());
    let block = captures.get(1).map_or("", |m| m.as_str());
    let front_matter = block
        .strip_prefix("<!--")
        .and_then(|b| b.strip_suffix("-->"))
        .unwrap_or(block)
        .trim();

    Preamble {
        source: cell_source[matched..].to_string(),
        preamble: format!("{front_matter}\n{KATEX_IMPORT}\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_preamble_is_identity() {
        let source = "# Title\n\nSome <!-- inline --> comment.";
        let result = extract_preamble(source);
        assert_eq!(result.source, source);
        assert!(result.preamble.is_empty());
    }

    #[test]
    fn test_simple_preamble() {
        let result = extract_preamble("<!--front-->\nbody");
        assert_eq!(
            result.preamble,
            "front\nimport 'katex/dist/katex.min.css'\n\n"
        );
        assert_eq!(result.source, "body");
    }

    #[test]
    fn test_front_matter_block() {
        let source = "\n\n<!--\n---\ntitle: Notes\ntags: [a-b]\n---\n-->\n\n# Heading\n";
        let result = extract_preamble(source);
        assert_eq!(
            result.preamble,
            "---\ntitle: Notes\ntags: [a-b]\n---\nimport 'katex/dist/katex.min.css'\n\n"
        );
        assert_eq!(result.source, "# Heading\n");
    }

    #[test]
    fn test_stops_at_first_closer() {
        let result = extract_preamble("<!-- a - b -- c -->rest -->");
        assert_eq!(result.preamble, format!("a - b -- c\n{KATEX_IMPORT}\n\n"));
        assert_eq!(result.source, "rest -->");
    }

    #[test]
    fn test_comment_not_at_start() {
        let source = "Intro\n<!--hidden-->";
        let result = extract_preamble(source);
        assert_eq!(result.source, source);
        assert_eq!(result.preamble, "");
    }

    #[test]
    fn test_unclosed_comment() {
        let source = "<!-- never closed";
        let result = extract_preamble(source);
        assert_eq!(result.source, source);
        assert_eq!(result.preamble, "");
    }
}
