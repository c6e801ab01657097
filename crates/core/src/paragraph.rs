//! Paragraph kinds produced from single input lines.

use crate::error::{Error, Result};
use crate::markup::{self, Markup};
use crate::sentence::Sentence;
use crate::source::{NumberedSource, Source};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Leading run of heading markers.
static HEADING_MARKERS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+").unwrap());

/// Leading run of heading markers plus the whitespace after it.
static HEADING_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s*").unwrap());

/// Terminator at the very end of a prose line.
static TRAILING_TERMINATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s*$").unwrap());

/// Terminator between two sentences.
static TERMINATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s*").unwrap());

/// Numbered list item: indentation, index, period, item text.
static NUMBERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( *)([0-9]+)\. *(.*)$").unwrap());

/// A section heading such as `## Results`.
///
/// A stored heading is rebuilt from its text when loaded, so its level is
/// recomputed and a line without markers is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Source")]
pub struct Heading {
    /// Raw source line.
    contents: String,

    /// Number of leading markers, at least 1.
    level: usize,
}

impl Heading {
    /// Build a heading, failing if the line has no leading marker run.
    pub fn new(contents: impl Into<String>) -> Result<Self> {
        let contents = contents.into();
        let level = HEADING_MARKERS_REGEX
            .find(&contents)
            .map(|m| m.len())
            .ok_or_else(|| Error::MalformedHeading(contents.clone()))?;
        Ok(Self { contents, level })
    }

    /// Number of leading markers.
    pub fn level(&self) -> usize {
        self.level
    }
}

impl TryFrom<Source> for Heading {
    type Error = Error;

    fn try_from(source: Source) -> Result<Self> {
        Self::new(source.contents)
    }
}

impl Markup for Heading {
    fn raw_string(&self) -> &str {
        &self.contents
    }

    fn display_string(&self) -> String {
        let prefix = HEADING_PREFIX_REGEX
            .find(&self.contents)
            .map_or(0, |m| m.len());
        self.contents[prefix..].to_string()
    }

    fn framed_display(&self) -> String {
        markup::section(&self.display_string())
    }
}

/// A line of prose, split into sentences.
///
/// Loading a stored paragraph splits its text again; stored sentences are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Source")]
pub struct Prose {
    /// Raw source line.
    contents: String,

    /// Sentences in source order.
    sentences: Vec<Sentence>,
}

impl Prose {
    /// Build a prose paragraph.
    ///
    /// The final terminator is stripped first, then the rest is split on
    /// every terminator and its trailing whitespace. An empty line yields a
    /// single empty sentence.
    pub fn new(contents: impl Into<String>) -> Self {
        let contents = contents.into();
        let stripped = TRAILING_TERMINATOR_REGEX.replace_all(&contents, "");
        let sentences = TERMINATOR_REGEX
            .split(&stripped)
            .map(Sentence::new)
            .collect();
        Self {
            contents,
            sentences,
        }
    }

    /// Sentences in source order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences that become slides.
    pub fn slide_count(&self) -> usize {
        self.sentences.iter().filter(|s| s.is_emphasized()).count()
    }
}

impl From<Source> for Prose {
    fn from(source: Source) -> Self {
        Self::new(source.contents)
    }
}

impl Markup for Prose {
    fn raw_string(&self) -> &str {
        &self.contents
    }

    fn display_string(&self) -> String {
        self.sentences
            .iter()
            .map(|s| format!("{}.\n", s.display_string()))
            .collect()
    }

    fn framed_display(&self) -> String {
        self.sentences.iter().map(Sentence::framed_display).collect()
    }
}

/// A numbered list item such as `  3. Third`.
///
/// Recognized so it does not end up as prose, but it renders to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NumberedSource")]
pub struct NumberedItem {
    /// Raw source line.
    contents: String,

    /// The list-item number.
    index: u64,

    /// Text after the index marker.
    item: String,

    /// Nesting depth from leading indentation.
    level: usize,
}

impl NumberedItem {
    /// Parse a numbered item, or `None` if the line is not one.
    pub fn parse(contents: &str, tab_width: usize) -> Option<Self> {
        let caps = NUMBERED_ITEM_REGEX.captures(contents)?;
        // Digit runs too long for u64 fall back to prose.
        let index = caps[2].parse().ok()?;
        Some(Self {
            contents: contents.to_string(),
            index,
            item: caps[3].to_string(),
            level: caps[1].len() / tab_width.max(1),
        })
    }

    /// The list-item number.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Text after the index marker.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Nesting depth from leading indentation.
    pub fn level(&self) -> usize {
        self.level
    }
}

impl TryFrom<NumberedSource> for NumberedItem {
    type Error = Error;

    fn try_from(source: NumberedSource) -> Result<Self> {
        let item = Self::parse(&source.contents, 1)
            .ok_or_else(|| Error::MalformedNumberedItem(source.contents.clone()))?;
        Ok(Self {
            level: source.level,
            ..item
        })
    }
}

impl Markup for NumberedItem {
    fn raw_string(&self) -> &str {
        &self.contents
    }

    fn display_string(&self) -> String {
        String::new()
    }

    fn framed_display(&self) -> String {
        String::new()
    }
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paragraph {
    /// Section heading.
    Heading(Heading),
    /// Numbered list item, not rendered.
    NumberedItem(NumberedItem),
    /// Prose split into sentences.
    Prose(Prose),
}

impl Paragraph {
    /// Short name of the paragraph kind, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Paragraph::Heading(_) => "heading",
            Paragraph::NumberedItem(_) => "numbered item",
            Paragraph::Prose(_) => "prose",
        }
    }

    /// Number of slides this paragraph contributes.
    pub fn slide_count(&self) -> usize {
        match self {
            Paragraph::Prose(prose) => prose.slide_count(),
            Paragraph::Heading(_) | Paragraph::NumberedItem(_) => 0,
        }
    }

    fn as_markup(&self) -> &dyn Markup {
        match self {
            Paragraph::Heading(heading) => heading,
            Paragraph::NumberedItem(item) => item,
            Paragraph::Prose(prose) => prose,
        }
    }
}

impl Markup for Paragraph {
    fn raw_string(&self) -> &str {
        self.as_markup().raw_string()
    }

    fn display_string(&self) -> String {
        self.as_markup().display_string()
    }

    fn framed_display(&self) -> String {
        self.as_markup().framed_display()
    }
}
