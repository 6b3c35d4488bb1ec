//! Raw emoji metadata corpus.
//!
//! The corpus uses the emoji-datasource JSON schema: an array of objects,
//! one per emoji, of which only a handful of fields matter here
//! ([`record::EmojiRecord`]). [`decode`] turns a record's `unified`
//! codepoint string into the printable character.

pub mod decode;
pub mod record;

use std::path::Path;

pub use decode::{decode_codepoints, encode_codepoints};
pub use record::EmojiRecord;

use crate::error::{PickerError, PickerResult};

/// Parses a full corpus from a JSON array string.
///
/// Record order is preserved; it is the tie-breaker when records share a
/// `sort_order`.
///
/// # Errors
///
/// [`PickerError::CorpusParse`] if the JSON is malformed or a record is
/// missing a required field.
pub fn parse_corpus(json: &str) -> PickerResult<Vec<EmojiRecord>> {
    let records: Vec<EmojiRecord> =
        serde_json::from_str(json).map_err(|e| PickerError::CorpusParse(e.to_string()))?;
    tracing::debug!(records = records.len(), "parsed emoji corpus");
    Ok(records)
}

/// Reads and parses a corpus JSON file.
///
/// # Errors
///
/// - [`PickerError::NotFound`] if the file does not exist.
/// - [`PickerError::PermissionDenied`] if the file is not readable.
/// - [`PickerError::CorpusParse`] if the JSON is malformed.
pub fn load_corpus(path: &Path) -> PickerResult<Vec<EmojiRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| PickerError::from_io(path, e))?;
    parse_corpus(&content)
}
