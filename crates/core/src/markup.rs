//! The rendering contract shared by paragraphs and sentences, and the
//! Beamer directives they emit.

/// Three views of a piece of source text.
pub trait Markup {
    /// The verbatim source text.
    fn raw_string(&self) -> &str;

    /// A human-readable plain rendering.
    fn display_string(&self) -> String;

    /// This element's contribution to the slide deck.
    fn framed_display(&self) -> String;
}

/// Title used in the preamble when none is configured.
pub const DEFAULT_TITLE: &str = "Sample title";

/// Author used in the preamble when none is configured.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Closing directive of every document.
pub const POSTAMBLE: &str = "\\end{document}\n";

/// Document class, title and author declarations, then the body start.
pub fn preamble(title: &str, author: &str) -> String {
    format!(
        "\\documentclass{{beamer}}\n\\title{{{}}}\n\\author{{{}}}\n\n\\begin{{document}}\n",
        title, author
    )
}

/// Start a new section; slide titles resolve against the latest one.
pub fn section(text: &str) -> String {
    format!("\\section{{{}}}\n", text)
}

/// A standalone slide titled after the enclosing section.
pub fn frame(body: &str) -> String {
    format!(
        "\\begin{{frame}}\n\\frametitle{{\\insertsection}}\n{}\n\\end{{frame}}\n",
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preamble() {
        assert_eq!(
            preamble(DEFAULT_TITLE, DEFAULT_AUTHOR),
            "\\documentclass{beamer}\n\\title{Sample title}\n\\author{Anonymous}\n\n\\begin{document}\n"
        );
    }

    #[test]
    fn test_section() {
        assert_eq!(section("Intro"), "\\section{Intro}\n");
    }

    #[test]
    fn test_frame() {
        assert_eq!(
            frame("Body"),
            "\\begin{frame}\n\\frametitle{\\insertsection}\nBody\n\\end{frame}\n"
        );
    }
}
