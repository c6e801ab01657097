//! Inline emphasis transformation.
//!
//! Turns `**strong**` and `*emphasized*` spans inside a single sentence into
//! `\textbf{..}` and `\emph{..}` commands. Spans are matched greedily and
//! nesting is not understood.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex matching a strong span, delimited by doubled markers.
static STRONG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*.*\*\*").unwrap());

/// Regex matching an emphasis span, delimited by single markers.
static EMPHASIS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*.*\*").unwrap());

/// Whether the text contains a strong or an emphasis span.
pub fn has_emphasis(text: &str) -> bool {
    STRONG_REGEX.is_match(text) || EMPHASIS_REGEX.is_match(text)
}

/// Wrap a matched strong span, dropping two markers from each side.
fn strong_string(span: &str) -> String {
    format!("\\textbf{{{}}}", &span[2..span.len() - 2])
}

/// Wrap a matched emphasis span, dropping one marker from each side.
fn emphasized_string(span: &str) -> String {
    format!("\\emph{{{}}}", &span[1..span.len() - 1])
}

/// Apply both substitution passes to a sentence.
///
/// The strong pass runs over the whole text before the emphasis pass starts,
/// so `**` pairs are consumed before a single-marker match could see them.
pub fn transform(text: &str) -> String {
    let strong = STRONG_REGEX.replace_all(text, |caps: &Captures| strong_string(&caps[0]));
    EMPHASIS_REGEX
        .replace_all(&strong, |caps: &Captures| emphasized_string(&caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_span() {
        assert_eq!(transform("**Bold** sentence"), "\\textbf{Bold} sentence");
    }

    #[test]
    fn test_emphasis_span() {
        assert_eq!(transform("This is *nice*"), "This is \\emph{nice}");
    }

    #[test]
    fn test_strong_before_emphasis() {
        assert_eq!(
            transform("**loud** then *soft*"),
            "\\textbf{loud} then \\emph{soft}"
        );
    }

    #[test]
    fn test_text_without_markers_is_unchanged() {
        let input = "Nothing to see here, move along";
        assert_eq!(transform(input), input);
        assert_eq!(transform(""), "");
    }

    #[test]
    fn test_single_marker_is_left_alone() {
        assert_eq!(transform("2 * 3"), "2 * 3");
        assert!(!has_emphasis("2 * 3"));
    }

    #[test]
    fn test_greedy_spans_collapse() {
        // Two emphasis spans on one sentence become a single outer span.
        assert_eq!(transform("*a* and *b*"), "\\emph{a* and *b}");
    }

    #[test]
    fn test_empty_spans() {
        assert_eq!(transform("****"), "\\textbf{}");
        assert_eq!(transform("**"), "\\emph{}");
    }

    #[test]
    fn test_has_emphasis() {
        assert!(has_emphasis("**Bold** sentence"));
        assert!(has_emphasis("This is *nice*"));
        assert!(!has_emphasis("This is plain"));
    }
}
