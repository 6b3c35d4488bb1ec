//! Platform and block-list filtering for corpus records.

use std::collections::HashSet;

use crate::corpus::EmojiRecord;
use crate::platform::PlatformContext;

/// Short names the picker never offers, whatever the platform.
pub const DEFAULT_BLOCKED_SHORT_NAMES: &[&str] = &["white_frowning_face", "keycap_star", "eject"];

/// A set of record short names to exclude from the catalog.
///
/// [`Blocklist::default`] holds [`DEFAULT_BLOCKED_SHORT_NAMES`]; use
/// [`Blocklist::empty`] or collect an iterator for a custom list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocklist {
    short_names: HashSet<String>,
}

impl Blocklist {
    /// A block-list that blocks nothing.
    pub fn empty() -> Self {
        Self {
            short_names: HashSet::new(),
        }
    }

    pub fn contains(&self, short_name: &str) -> bool {
        self.short_names.contains(short_name)
    }

    pub fn len(&self) -> usize {
        self.short_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.short_names.is_empty()
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        DEFAULT_BLOCKED_SHORT_NAMES.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Blocklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            short_names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns `true` if `record` survives the block-list and platform rules.
pub fn is_displayable(
    record: &EmojiRecord,
    platform: &PlatformContext,
    blocklist: &Blocklist,
) -> bool {
    if blocklist.contains(record.short_name()) {
        return false;
    }
    platform.supports(record.added_in())
}

/// Keeps the records that are neither blocked nor unsupported on `platform`.
///
/// Corpus order is preserved. Returns a new `Vec`; the input is never
/// mutated.
pub fn filter_records(
    records: &[EmojiRecord],
    platform: &PlatformContext,
    blocklist: &Blocklist,
) -> Vec<EmojiRecord> {
    let kept: Vec<EmojiRecord> = records
        .iter()
        .filter(|r| is_displayable(r, platform, blocklist))
        .cloned()
        .collect();

    tracing::debug!(
        os = %platform.os(),
        version = platform.version(),
        kept = kept.len(),
        dropped = records.len() - kept.len(),
        "filtered emoji corpus"
    );

    kept
}
