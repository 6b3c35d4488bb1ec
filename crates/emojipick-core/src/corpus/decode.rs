//! Codepoint sequence decoding.
//!
//! Corpus records store characters as hyphen-delimited hex scalar values
//! (`"1F600"`, `"1F1E6-1F1F7"`). Rust `char` is a full Unicode scalar
//! value, so supplementary-plane codepoints need no surrogate handling;
//! surrogate halves themselves are rejected.

use crate::error::{PickerError, PickerResult};

/// Decodes a `unified` codepoint string into the character sequence it names.
///
/// `short_name` only labels the error.
///
/// # Errors
///
/// [`PickerError::CorpusIntegrity`] if a token is empty, contains anything
/// but ASCII hex digits (a sign prefix included), is above
/// `0x10FFFF`, or in the surrogate range.
pub fn decode_codepoints(short_name: &str, unified: &str) -> PickerResult<String> {
    unified
        .split('-')
        .map(|token| {
            Some(token)
                .filter(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|t| u32::from_str_radix(t, 16).ok())
                .and_then(char::from_u32)
                .ok_or_else(|| PickerError::CorpusIntegrity {
                    short_name: short_name.to_string(),
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Inverse of [`decode_codepoints`]: uppercase hex scalar values joined by `-`.
pub fn encode_codepoints(s: &str) -> String {
    s.chars()
        .map(|c| format!("{:04X}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}
