//! Composition root for a picker instance.

use crate::catalog::builder::Catalog;
use crate::catalog::category::Category;
use crate::catalog::filter::Blocklist;
use crate::config::settings::PickerConfig;
use crate::corpus::EmojiRecord;
use crate::error::PickerResult;
use crate::platform::PlatformContext;
use crate::view::list::{CategoryListModel, CategoryView};

/// Everything the rendering surface needs, built once and read-only after.
///
/// Construction is synchronous and all-or-nothing: a bad config or a
/// corrupt corpus record fails [`EmojiPicker::new`] before anything renders.
#[derive(Debug, Clone)]
pub struct EmojiPicker {
    catalog: Catalog,
    config: PickerConfig,
}

impl EmojiPicker {
    /// Validates `config` and builds the catalog for `platform`.
    ///
    /// # Errors
    ///
    /// - [`crate::PickerError::InvalidConfig`] if `config` fails validation.
    /// - [`crate::PickerError::CorpusIntegrity`] if a displayable record has
    ///   a malformed codepoint.
    pub fn new(
        corpus: &[EmojiRecord],
        platform: &PlatformContext,
        blocklist: &Blocklist,
        config: PickerConfig,
    ) -> PickerResult<Self> {
        config.validate()?;
        let catalog = Catalog::initialize(corpus, platform, blocklist)?;
        tracing::debug!(
            os = %platform.os(),
            version = platform.version(),
            emojis = catalog.browsable_len(),
            "emoji picker initialized"
        );
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The browsing model over this picker's catalog.
    pub fn categories(&self) -> CategoryListModel<'_> {
        CategoryListModel::new(&self.catalog, &self.config)
    }

    /// Shorthand for materializing one category.
    pub fn materialize(&self, category: Category) -> CategoryView<'_> {
        self.categories().materialize(category)
    }

    /// Clear button caption, or `None` when the button is hidden.
    pub fn clear_button_text(&self) -> Option<&str> {
        if self.config.hide_clear_button {
            None
        } else {
            Some(&self.config.clear_button_text)
        }
    }
}
