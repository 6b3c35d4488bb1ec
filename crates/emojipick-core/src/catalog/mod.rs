//! Catalog construction pipeline.
//!
//! Raw corpus records pass through [`filter::filter_records`] (block-list
//! and platform support) and then [`builder::build_catalog`] (stable sort,
//! grouping, decoding) to produce the immutable [`builder::Catalog`].
//! [`category::Category`] names the eight groups the picker browses.

pub mod builder;
pub mod category;
pub mod filter;
