//! Catalog construction: ordering, grouping, and decoding filtered records.

use std::collections::BTreeMap;

use crate::catalog::category::Category;
use crate::catalog::filter::{filter_records, Blocklist};
use crate::corpus::{decode_codepoints, EmojiRecord};
use crate::error::PickerResult;
use crate::platform::PlatformContext;

/// Printable emoji grouped by corpus category, built once and read-only after.
///
/// Every group is ordered by ascending `sort_order`, ties kept in corpus
/// order. Groups whose key is not a browsable [`Category`] are retained
/// but only reachable through [`Catalog::raw_group`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    groups: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// Filters `corpus` for `platform` and `blocklist`, then builds the catalog.
    ///
    /// # Errors
    ///
    /// [`crate::PickerError::CorpusIntegrity`] if a surviving record has a
    /// malformed codepoint.
    pub fn initialize(
        corpus: &[EmojiRecord],
        platform: &PlatformContext,
        blocklist: &Blocklist,
    ) -> PickerResult<Self> {
        let filtered = filter_records(corpus, platform, blocklist);
        build_catalog(&filtered)
    }

    /// The ordered characters of a browsable category.
    ///
    /// Empty when no record of that category survived filtering.
    pub fn emojis(&self, category: Category) -> &[String] {
        self.raw_group(category.key()).unwrap_or(&[])
    }

    /// The group stored under a raw corpus key, browsable or not.
    pub fn raw_group(&self, key: &str) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Keys retained in the catalog that no [`Category`] exposes.
    pub fn hidden_keys(&self) -> impl Iterator<Item = &str> {
        self.groups
            .keys()
            .map(String::as_str)
            .filter(|key| Category::from_key(key).is_none())
    }

    /// Total characters across the browsable categories.
    pub fn browsable_len(&self) -> usize {
        Category::ALL.iter().map(|c| self.emojis(*c).len()).sum()
    }
}

/// Builds a [`Catalog`] from records that already passed filtering.
///
/// Sorting is stable, so records sharing a `sort_order` keep the order
/// they have in `records`.
///
/// # Errors
///
/// [`crate::PickerError::CorpusIntegrity`] on the first undecodable record;
/// no partial catalog is returned.
pub fn build_catalog(records: &[EmojiRecord]) -> PickerResult<Catalog> {
    let mut sorted: Vec<&EmojiRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.sort_order());

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for record in sorted {
        let character = decode_codepoints(record.short_name(), record.unified())?;
        groups
            .entry(record.category().to_string())
            .or_default()
            .push(character);
    }

    let catalog = Catalog { groups };

    for key in catalog.hidden_keys() {
        tracing::debug!(category = key, "retaining non-browsable category");
    }
    for category in Category::ALL {
        tracing::debug!(
            category = category.key(),
            emojis = catalog.emojis(category).len(),
            "built catalog category"
        );
    }

    Ok(catalog)
}
