//! Error types for `emojipick-core`.
//!
//! All fallible operations in the core library return [`PickerResult<T>`],
//! which is an alias for `Result<T, PickerError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Every variant describes a development-time defect (bad corpus packaging,
/// bad configuration). None of them can be triggered by end-user input.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A codepoint token in the corpus is not a valid Unicode scalar value.
    #[error("corpus integrity error: record `{short_name}` has invalid codepoint `{token}`")]
    CorpusIntegrity { short_name: String, token: String },

    /// The corpus JSON could not be deserialized.
    #[error("corpus parse error: {0}")]
    CorpusParse(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The configuration parsed but holds values the picker cannot use.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PickerError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }
}

/// Convenience alias used throughout `emojipick-core`.
pub type PickerResult<T> = Result<T, PickerError>;
