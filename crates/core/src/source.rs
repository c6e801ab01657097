//! Serialized shapes that model types are rebuilt from when loaded.
//!
//! Only the raw source text is read back; derived fields such as heading
//! levels and sentence kinds are recomputed by the constructors.

use serde::Deserialize;

/// Raw text of a heading, prose line, or sentence.
#[derive(Debug, Deserialize)]
pub struct Source {
    pub contents: String,
}

/// Raw text of a numbered item plus its recorded nesting level.
///
/// The level depends on the classifier's tab width, which is not stored, so
/// it is kept as written.
#[derive(Debug, Deserialize)]
pub struct NumberedSource {
    pub contents: String,
    pub level: usize,
}
