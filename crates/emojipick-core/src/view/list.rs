//! The fixed, ordered category list and on-demand materialization.

use crate::catalog::builder::Catalog;
use crate::catalog::category::Category;
use crate::config::settings::PickerConfig;
use crate::view::layout::CategoryLayout;

/// One row of the category list: what a navigation header shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry<'a> {
    category: Category,
    label: &'a str,
}

impl<'a> CategoryEntry<'a> {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Display label, localized when the config supplies one.
    pub fn label(&self) -> &'a str {
        self.label
    }
}

/// A fully materialized category, borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView<'a> {
    pub category: Category,
    pub label: &'a str,
    /// Every character in the category, in catalog order. Never truncated.
    pub emojis: &'a [String],
    pub layout: CategoryLayout,
}

/// Read-only browsing model over a [`Catalog`].
///
/// Always lists all eight categories in [`Category::ALL`] order, including
/// categories that ended up empty after filtering, so navigation
/// positions never shift between platforms.
#[derive(Debug, Clone)]
pub struct CategoryListModel<'a> {
    catalog: &'a Catalog,
    entries: [CategoryEntry<'a>; Category::COUNT],
    emoji_size: u32,
    rows: u32,
}

impl<'a> CategoryListModel<'a> {
    /// Builds the model. `config` is expected to be validated already.
    pub fn new(catalog: &'a Catalog, config: &'a PickerConfig) -> Self {
        let entries = Category::ALL.map(|category| CategoryEntry {
            category,
            label: config.category_label(category),
        });
        Self {
            catalog,
            entries,
            emoji_size: config.emoji_size,
            rows: config.rows,
        }
    }

    /// The eight category entries in display order.
    pub fn entries(&self) -> &[CategoryEntry<'a>] {
        &self.entries
    }

    /// Category keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.category.key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Realizes the content of `category`.
    ///
    /// Pure: any number of calls, in any order, return equal views.
    pub fn materialize(&self, category: Category) -> CategoryView<'a> {
        let entry = self.entries[category.index()];
        let emojis = self.catalog.emojis(category);
        tracing::trace!(category = category.key(), emojis = emojis.len(), "materialize");
        CategoryView {
            category,
            label: entry.label(),
            emojis,
            layout: CategoryLayout::new(emojis.len(), self.emoji_size, self.rows),
        }
    }
}
