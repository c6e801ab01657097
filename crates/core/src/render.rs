//! Beamer (LaTeX slide deck) output.
//!
//! The preamble declares the document, then each paragraph contributes its
//! framed display in order: headings open sections, emphasized sentences
//! become frames whose title refers back to the latest section.

use crate::document::Document;
use crate::markup::{self, Markup, DEFAULT_AUTHOR, DEFAULT_TITLE, POSTAMBLE};

/// Renderer for Beamer documents.
#[derive(Debug, Clone)]
pub struct BeamerRenderer {
    /// Value of the `\title` declaration.
    title: String,

    /// Value of the `\author` declaration.
    author: String,
}

impl Default for BeamerRenderer {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl BeamerRenderer {
    /// Create a renderer with the placeholder title and author.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Use a custom author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Render a document.
    ///
    /// # Example output
    /// ```text
    /// \documentclass{beamer}
    /// \title{Sample title}
    /// \author{Anonymous}
    ///
    /// \begin{document}
    /// \section{Intro}
    /// \begin{frame}
    /// \frametitle{\insertsection}
    /// \textbf{Bold} sentence
    /// \end{frame}
    /// \end{document}
    /// ```
    pub fn render(&self, document: &Document) -> String {
        let mut output = markup::preamble(&self.title, &self.author);

        for paragraph in document.paragraphs() {
            output.push_str(&paragraph.framed_display());
        }

        output.push_str(POSTAMBLE);
        output
    }
}
