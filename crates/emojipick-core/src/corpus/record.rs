//! Corpus record representation.

use serde::{Deserialize, Serialize};

/// Metadata for one emoji as shipped in the corpus.
///
/// `EmojiRecord` is immutable; the catalog pipeline only ever reads it.
/// Fields map onto the emoji-datasource JSON keys and any other keys in
/// the source object are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    short_name: String,
    unified: String,
    category: String,
    sort_order: u32,
    added_in: String,
}

impl EmojiRecord {
    /// Creates a record from its raw fields.
    pub fn new(
        short_name: impl Into<String>,
        unified: impl Into<String>,
        category: impl Into<String>,
        sort_order: u32,
        added_in: impl Into<String>,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            unified: unified.into(),
            category: category.into(),
            sort_order,
            added_in: added_in.into(),
        }
    }

    /// Unique identifier such as `"grinning"`.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Hyphen-delimited hex codepoints, e.g. `"1F1E6-1F1F7"`.
    pub fn unified(&self) -> &str {
        &self.unified
    }

    /// Raw category key, e.g. `"Smileys & Emotion"`.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sort_order(&self) -> u32 {
        self.sort_order
    }

    /// Emoji release the character first appeared in, e.g. `"4.0"`.
    pub fn added_in(&self) -> &str {
        &self.added_in
    }
}
