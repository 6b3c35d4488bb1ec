//! Viewport sizing for a materialized category.

/// Spacing around each emoji and around the category body.
pub const PADDING: u32 = 5;

/// Display bounds for one category.
///
/// Characters flow down a column and wrap into the next one, so `rows`
/// caps the viewport height while `columns` grows with the group. This
/// only affects what is visible at once; every character stays reachable
/// by scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLayout {
    rows: u32,
    item_extent: u64,
    max_height: u64,
    columns: usize,
}

impl CategoryLayout {
    /// Computes the layout for `len` characters of `emoji_size`, `rows` high.
    ///
    /// `rows` must be non-zero; [`crate::PickerConfig::validate`] enforces it.
    pub fn new(len: usize, emoji_size: u32, rows: u32) -> Self {
        let padding = u64::from(PADDING);
        let item_extent = u64::from(emoji_size) + padding * 2;
        let rows_per_column = rows.max(1) as usize;
        Self {
            rows,
            item_extent,
            max_height: item_extent
                .saturating_mul(u64::from(rows))
                .saturating_add(padding),
            columns: len.div_ceil(rows_per_column),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Height and width of one emoji cell, padding included.
    pub fn item_extent(&self) -> u64 {
        self.item_extent
    }

    /// Maximum height of the category body.
    pub fn max_height(&self) -> u64 {
        self.max_height
    }

    /// Number of columns needed to lay out every character.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Width of the category body without horizontal margin.
    pub fn content_width(&self) -> u64 {
        u64::try_from(self.columns)
            .unwrap_or(u64::MAX)
            .saturating_mul(self.item_extent)
    }

    /// Zero-based `(column, row)` of the character at `index`.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        let rows = self.rows.max(1) as usize;
        (index / rows, index % rows)
    }
}
