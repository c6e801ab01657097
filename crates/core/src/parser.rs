//! Line classification and document parsing.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::paragraph::{Heading, NumberedItem, Paragraph, Prose};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

/// A whole line starting with a heading marker.
static HEADING_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+.*$").unwrap());

/// Indentation width that makes up one list nesting level.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Maps raw lines to paragraphs.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    /// Spaces per nesting level of numbered items.
    tab_width: usize,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl LineClassifier {
    /// Create a classifier with the default tab width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width of one list level.
    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width.max(1);
        self
    }

    /// Classify one line.
    ///
    /// Checks run in order: heading, numbered item, prose. Empty lines
    /// produce no paragraph.
    pub fn classify(&self, line: &str) -> Result<Option<Paragraph>> {
        if HEADING_LINE_REGEX.is_match(line) {
            return Heading::new(line).map(|h| Some(Paragraph::Heading(h)));
        }

        if let Some(item) = NumberedItem::parse(line, self.tab_width) {
            return Ok(Some(Paragraph::NumberedItem(item)));
        }

        if line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Paragraph::Prose(Prose::new(line))))
        }
    }

    /// Build a document from lines, stopping at the first fatal line.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Document>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut document = Document::new();

        for (idx, line) in lines.into_iter().enumerate() {
            self.push_line(&mut document, idx + 1, line.as_ref())?;
        }

        log_summary(&document);
        Ok(document)
    }

    /// Build a document from a buffered reader, one line at a time.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Document> {
        let mut document = Document::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            self.push_line(&mut document, idx + 1, &line)?;
        }

        log_summary(&document);
        Ok(document)
    }

    fn push_line(&self, document: &mut Document, number: usize, line: &str) -> Result<()> {
        match self.classify(line) {
            Ok(Some(paragraph)) => {
                log::debug!("Line {}: {}", number, paragraph.kind_name());
                document.push(paragraph);
                Ok(())
            }
            Ok(None) => {
                log::trace!("Line {}: empty, skipped", number);
                Ok(())
            }
            Err(e @ Error::MalformedHeading(_)) => {
                log::error!("Line {}: {}", number, e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

fn log_summary(document: &Document) {
    log::debug!(
        "Parsed {} paragraphs, {} slides",
        document.paragraphs().len(),
        document.slide_count()
    );
}

/// Parse lines with the default classifier.
pub fn parse_lines<I, S>(lines: I) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LineClassifier::new().parse_lines(lines)
}

/// Parse a whole text, split on line boundaries.
pub fn parse_str(text: &str) -> Result<Document> {
    parse_lines(text.lines())
}

/// Parse lines streamed from a reader with the default classifier.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document> {
    LineClassifier::new().parse_reader(reader)
}
