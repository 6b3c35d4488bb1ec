//! Emojipick core library, UI-agnostic emoji picker logic.
//!
//! `emojipick-core` builds the catalog behind a single-selection emoji
//! picker (such as a message-reaction picker) and dispatches the user's
//! choice back to the host. It knows nothing about any UI toolkit: a
//! rendering surface asks for categories, materializes them as they come
//! into view, and forwards taps as [`Interaction`]s.
//!
//! # Modules
//!
//! - [`corpus`]: Raw emoji metadata: [`EmojiRecord`], JSON loading, codepoint decoding.
//! - [`platform`]: [`PlatformContext`] and the Android emoji font support table.
//! - [`catalog`]: Filtering, ordering and grouping into the immutable [`Catalog`].
//! - [`view`]: The fixed [`Category`] list, lazy materialization, viewport layout.
//! - [`selection`]: [`SelectionController`] for clear / select / outside-tap callbacks.
//! - [`config`]: Picker options ([`PickerConfig`]), optionally loaded from TOML.
//! - [`event`]: Interaction and selection event types.
//! - [`error`]: Unified error type ([`PickerError`]) and result alias ([`PickerResult`]).
//!
//! # Examples
//!
//! ```
//! use emojipick_core::{
//!     parse_corpus, Blocklist, Category, EmojiPicker, PickerConfig, PlatformContext,
//! };
//!
//! let corpus = parse_corpus(r#"[
//!     {"short_name": "grinning", "unified": "1F600", "category": "Smileys & Emotion",
//!      "sort_order": 1, "added_in": "2.0"}
//! ]"#)?;
//! let picker = EmojiPicker::new(
//!     &corpus,
//!     &PlatformContext::android(24),
//!     &Blocklist::default(),
//!     PickerConfig::default(),
//! )?;
//!
//! assert_eq!(picker.categories().len(), 8);
//! assert_eq!(picker.materialize(Category::SmileysEmotion).emojis, &["😀"]);
//! # Ok::<(), emojipick_core::PickerError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod event;
pub mod picker;
pub mod platform;
pub mod selection;
pub mod view;

pub use catalog::builder::{build_catalog, Catalog};
pub use catalog::category::Category;
pub use catalog::filter::{filter_records, is_displayable, Blocklist, DEFAULT_BLOCKED_SHORT_NAMES};
pub use config::settings::PickerConfig;
pub use corpus::{decode_codepoints, encode_codepoints, load_corpus, parse_corpus, EmojiRecord};
pub use error::{PickerError, PickerResult};
pub use event::{Interaction, SelectionEvent};
pub use picker::EmojiPicker;
pub use platform::{min_android_api, Os, PlatformContext};
pub use selection::SelectionController;
pub use view::layout::CategoryLayout;
pub use view::list::{CategoryEntry, CategoryListModel, CategoryView};
pub use view::window::RealizationWindow;
