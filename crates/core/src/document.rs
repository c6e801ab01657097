//! The parsed document: paragraphs in input order.

use crate::markup::Markup;
use crate::paragraph::Paragraph;
use crate::render::BeamerRenderer;
use serde::{Deserialize, Serialize};

/// An ordered sequence of paragraphs.
///
/// Built by appending during parsing; nothing is ever removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in source line order.
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph.
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Paragraphs in source line order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Total number of slides the document renders to.
    pub fn slide_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::slide_count).sum()
    }

    /// Plain rendering: each paragraph's display string on its own line.
    pub fn display_string(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| format!("{}\n", p.display_string()))
            .collect()
    }

    /// Render the slide deck with the fixed preamble.
    pub fn render(&self) -> String {
        BeamerRenderer::new().render(self)
    }
}
