//! Error types for markdown-to-Beamer conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a document.
#[derive(Error, Debug)]
pub enum Error {
    /// A line was classified as a heading but has no leading marker run.
    #[error("Missing heading markers in line: {0:?}")]
    MalformedHeading(String),

    /// A stored numbered item whose text is not a numbered item.
    #[error("Not a numbered item: {0:?}")]
    MalformedNumberedItem(String),

    /// Failed to read input lines from the underlying reader.
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),
}
