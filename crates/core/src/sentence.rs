//! Sentences of prose and their slide rendering.

use crate::emphasis;
use crate::markup::{self, Markup};
use crate::source::Source;
use serde::{Deserialize, Serialize};

/// How a sentence renders, fixed when the sentence is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentenceKind {
    /// Shown as-is, never gets a slide.
    Plain,
    /// Carries a strong or emphasis span and gets a slide of its own.
    Emphasized,
}

/// One sentence of a prose paragraph, terminator removed.
///
/// Loading a stored sentence reclassifies it from its text; a stored kind
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Source")]
pub struct Sentence {
    /// Raw sentence text.
    contents: String,

    /// Classification made from the raw text.
    kind: SentenceKind,
}

impl Sentence {
    /// Build a sentence, classifying it by its emphasis markers.
    pub fn new(contents: impl Into<String>) -> Self {
        let contents = contents.into();
        let kind = if emphasis::has_emphasis(&contents) {
            SentenceKind::Emphasized
        } else {
            SentenceKind::Plain
        };
        log::trace!("Sentence {:?} classified as {:?}", contents, kind);
        Self { contents, kind }
    }

    /// Classification made at construction.
    pub fn kind(&self) -> SentenceKind {
        self.kind
    }

    /// Whether this sentence becomes a slide.
    pub fn is_emphasized(&self) -> bool {
        self.kind == SentenceKind::Emphasized
    }
}

impl From<Source> for Sentence {
    fn from(source: Source) -> Self {
        Self::new(source.contents)
    }
}

impl Markup for Sentence {
    fn raw_string(&self) -> &str {
        &self.contents
    }

    fn display_string(&self) -> String {
        match self.kind {
            SentenceKind::Plain => self.contents.clone(),
            SentenceKind::Emphasized => emphasis::transform(&self.contents),
        }
    }

    fn framed_display(&self) -> String {
        match self.kind {
            SentenceKind::Plain => String::new(),
            SentenceKind::Emphasized => markup::frame(&self.display_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sentence() {
        let sentence = Sentence::new("This is plain");
        assert_eq!(sentence.kind(), SentenceKind::Plain);
        assert_eq!(sentence.display_string(), "This is plain");
        assert_eq!(sentence.framed_display(), "");
    }

    #[test]
    fn test_emphasized_sentence() {
        let sentence = Sentence::new("This is *nice*");
        assert!(sentence.is_emphasized());
        assert_eq!(sentence.raw_string(), "This is *nice*");
        assert_eq!(sentence.display_string(), "This is \\emph{nice}");
        assert_eq!(
            sentence.framed_display(),
            "\\begin{frame}\n\\frametitle{\\insertsection}\nThis is \\emph{nice}\n\\end{frame}\n"
        );
    }

    #[test]
    fn test_plain_sentence_keeps_lone_marker() {
        let sentence = Sentence::new("Multiply 2 * 3");
        assert_eq!(sentence.kind(), SentenceKind::Plain);
        assert_eq!(sentence.display_string(), "Multiply 2 * 3");
    }

    #[test]
    fn test_loading_reclassifies_from_text() {
        let sentence: Sentence =
            serde_json::from_str(r#"{"contents":"*loud*","kind":"Plain"}"#).unwrap();
        assert_eq!(sentence.kind(), SentenceKind::Emphasized);
        assert_eq!(
            sentence.framed_display(),
            "\\begin{frame}\n\\frametitle{\\insertsection}\n\\emph{loud}\n\\end{frame}\n"
        );

        let plain: Sentence = serde_json::from_str(r#"{"contents":"quiet"}"#).unwrap();
        assert_eq!(plain.kind(), SentenceKind::Plain);
    }
}
