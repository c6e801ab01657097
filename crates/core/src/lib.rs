//! Document model, line classification, and Beamer rendering for
//! converting lightweight markdown into slide decks.

pub mod document;
pub mod emphasis;
pub mod error;
pub mod markup;
pub mod paragraph;
pub mod parser;
pub mod render;
pub mod sentence;
mod source;

pub use document::Document;
pub use error::{Error, Result};
pub use markup::Markup;
pub use paragraph::{Heading, NumberedItem, Paragraph, Prose};
pub use parser::{parse_lines, parse_reader, parse_str, LineClassifier};
pub use render::BeamerRenderer;
pub use sentence::{Sentence, SentenceKind};
