//! Tracking which categories the rendering layer has materialized.

use std::collections::BTreeSet;

use crate::catalog::category::Category;

/// Categories materialized when the picker first renders.
pub const DEFAULT_INITIAL_NUM_TO_RENDER: usize = 1;

/// Categories materialized per scheduling pass after the first render.
pub const DEFAULT_MAX_TO_RENDER_PER_BATCH: usize = 1;

/// The set of materialized categories, owned by the rendering layer.
///
/// Immutable: every transition returns a new `RealizationWindow`.
/// Marking a category that is already materialized is a no-op, and since
/// [`crate::CategoryListModel::materialize`] is pure, the order in which
/// categories are realized never changes what they contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealizationWindow {
    max_to_render_per_batch: usize,
    materialized: BTreeSet<Category>,
}

impl Default for RealizationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_NUM_TO_RENDER, DEFAULT_MAX_TO_RENDER_PER_BATCH)
    }
}

impl RealizationWindow {
    /// Starts with the first `initial_num_to_render` categories materialized.
    ///
    /// A batch size of `0` is treated as `1` so [`Self::next_batch`]
    /// always makes progress.
    pub fn new(initial_num_to_render: usize, max_to_render_per_batch: usize) -> Self {
        Self {
            max_to_render_per_batch: max_to_render_per_batch.max(1),
            materialized: Category::ALL
                .iter()
                .copied()
                .take(initial_num_to_render)
                .collect(),
        }
    }

    /// Marks `category` materialized, e.g. because it scrolled into view.
    pub fn with_visible(self, category: Category) -> Self {
        let mut materialized = self.materialized;
        materialized.insert(category);
        Self {
            materialized,
            ..self
        }
    }

    /// Materializes up to one batch of the next pending categories.
    ///
    /// Returns the new window and the categories added, in display order.
    /// The list is empty once every category is materialized.
    pub fn next_batch(self) -> (Self, Vec<Category>) {
        let added: Vec<Category> = Category::ALL
            .iter()
            .copied()
            .filter(|c| !self.materialized.contains(c))
            .take(self.max_to_render_per_batch)
            .collect();
        let mut materialized = self.materialized;
        materialized.extend(added.iter().copied());
        (
            Self {
                materialized,
                ..self
            },
            added,
        )
    }

    pub fn is_materialized(&self, category: Category) -> bool {
        self.materialized.contains(&category)
    }

    /// Materialized categories in display order.
    pub fn materialized(&self) -> impl Iterator<Item = Category> + '_ {
        self.materialized.iter().copied()
    }

    /// Returns `true` once all eight categories are materialized.
    pub fn is_complete(&self) -> bool {
        self.materialized.len() == Category::COUNT
    }
}
