//! Browsing model handed to the rendering surface.
//!
//! [`list::CategoryListModel`] exposes the fixed category list and
//! materializes a category on demand. [`window::RealizationWindow`] is the
//! rendering layer's record of which categories it has materialized, and
//! [`layout::CategoryLayout`] bounds the viewport of one category.

pub mod layout;
pub mod list;
pub mod window;
