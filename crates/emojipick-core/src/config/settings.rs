//! Picker configuration, optionally loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::category::Category;
use crate::error::{PickerError, PickerResult};

/// Largest accepted `rows`.
pub const MAX_ROWS: u32 = 1_000;

/// Largest accepted `emoji_size`.
pub const MAX_EMOJI_SIZE: u32 = 1_024;

/// Every option the picker recognizes.
///
/// All fields have defaults so the picker works without any
/// configuration. Call [`PickerConfig::load`] to read from a TOML path and
/// [`PickerConfig::validate`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Visible rows per category before the group scrolls.
    #[serde(default = "default_rows")]
    pub rows: u32,
    /// Font size of a single emoji.
    #[serde(default = "default_emoji_size")]
    pub emoji_size: u32,
    /// Hides the clear button. The clear action stays available.
    #[serde(default)]
    pub hide_clear_button: bool,
    #[serde(default = "default_clear_button_text")]
    pub clear_button_text: String,
    /// Category labels aligned to [`Category::ALL`]. Raw keys when absent.
    #[serde(default)]
    pub localized_categories: Option<Vec<String>>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            emoji_size: default_emoji_size(),
            hide_clear_button: false,
            clear_button_text: default_clear_button_text(),
            localized_categories: None,
        }
    }
}

impl PickerConfig {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`PickerError::NotFound`] if the file does not exist.
    /// - [`PickerError::PermissionDenied`] if the file is not readable.
    /// - [`PickerError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> PickerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PickerError::from_io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> PickerResult<Self> {
        toml::from_str(content).map_err(|e| PickerError::ConfigParse(e.to_string()))
    }

    /// Checks that every option holds a usable value.
    ///
    /// # Errors
    ///
    /// [`PickerError::InvalidConfig`] if `rows` is outside `1..=MAX_ROWS`,
    /// `emoji_size` is outside `1..=MAX_EMOJI_SIZE`, or
    /// `localized_categories` does not have exactly one label per category.
    pub fn validate(&self) -> PickerResult<()> {
        if self.rows == 0 {
            return Err(PickerError::InvalidConfig(
                "rows must be at least 1".to_string(),
            ));
        }
        if self.rows > MAX_ROWS {
            return Err(PickerError::InvalidConfig(format!(
                "rows must be at most {MAX_ROWS}, got {}",
                self.rows
            )));
        }
        if self.emoji_size == 0 {
            return Err(PickerError::InvalidConfig(
                "emoji_size must be at least 1".to_string(),
            ));
        }
        if self.emoji_size > MAX_EMOJI_SIZE {
            return Err(PickerError::InvalidConfig(format!(
                "emoji_size must be at most {MAX_EMOJI_SIZE}, got {}",
                self.emoji_size
            )));
        }
        if let Some(labels) = &self.localized_categories {
            if labels.len() != Category::COUNT {
                return Err(PickerError::InvalidConfig(format!(
                    "localized_categories must have {} entries, got {}",
                    Category::COUNT,
                    labels.len()
                )));
            }
        }
        Ok(())
    }

    /// Display label for `category`.
    pub fn category_label(&self, category: Category) -> &str {
        self.localized_categories
            .as_ref()
            .and_then(|labels| labels.get(category.index()))
            .map(String::as_str)
            .unwrap_or_else(|| category.key())
    }
}

fn default_rows() -> u32 {
    7
}

fn default_emoji_size() -> u32 {
    24
}

fn default_clear_button_text() -> String {
    "Clear".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn japanese_labels() -> Vec<String> {
        [
            "スマイリー",
            "人",
            "動物",
            "食べ物",
            "アクティビティ",
            "旅行",
            "物",
            "記号",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn default_config() {
        let config = PickerConfig::default();

        assert_eq!(config.rows, 7);
        assert_eq!(config.emoji_size, 24);
        assert!(!config.hide_clear_button);
        assert_eq!(config.clear_button_text, "Clear");
        assert!(config.localized_categories.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("picker.toml");
        fs::write(
            &path,
            r#"
rows = 4
emoji_size = 32
hide_clear_button = true
clear_button_text = "Remove"
localized_categories = ["a", "b", "c", "d", "e", "f", "g", "h"]
"#,
        )
        .unwrap();

        let config = PickerConfig::load(&path).unwrap();

        assert_eq!(config.rows, 4);
        assert_eq!(config.emoji_size, 32);
        assert!(config.hide_clear_button);
        assert_eq!(config.clear_button_text, "Remove");
        assert_eq!(config.category_label(Category::Symbols), "h");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config = PickerConfig::from_toml_str("rows = 3").unwrap();

        assert_eq!(config.rows, 3);
        assert_eq!(config.emoji_size, 24);
        assert_eq!(config.clear_button_text, "Clear");
    }

    #[test]
    fn empty_toml_uses_all_defaults() {
        assert_eq!(PickerConfig::from_toml_str("").unwrap(), PickerConfig::default());
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = PickerConfig::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), PickerError::NotFound(_)));
    }

    #[test]
    fn invalid_toml_returns_config_parse() {
        let result = PickerConfig::from_toml_str("this is not valid [[[toml");
        assert!(matches!(result.unwrap_err(), PickerError::ConfigParse(_)));
    }

    #[test]
    fn wrong_type_returns_config_parse() {
        let result = PickerConfig::from_toml_str("rows = \"seven\"");
        assert!(matches!(result.unwrap_err(), PickerError::ConfigParse(_)));
    }

    #[test]
    fn zero_rows_is_invalid() {
        let config = PickerConfig {
            rows: 0,
            ..PickerConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            PickerError::InvalidConfig(_)
        ));
    }

    #[test]
    fn zero_emoji_size_is_invalid() {
        let config = PickerConfig {
            emoji_size: 0,
            ..PickerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_rows_is_invalid() {
        let config = PickerConfig {
            rows: MAX_ROWS + 1,
            ..PickerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid config: rows must be at most 1000, got 1001");
    }

    #[test]
    fn oversized_emoji_size_is_invalid() {
        let config = PickerConfig {
            rows: 1000,
            emoji_size: 10_000_000,
            ..PickerConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            PickerError::InvalidConfig(_)
        ));
    }

    #[test]
    fn largest_accepted_values_are_valid() {
        let config = PickerConfig {
            rows: MAX_ROWS,
            emoji_size: MAX_EMOJI_SIZE,
            ..PickerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn wrong_label_count_is_invalid() {
        let config = PickerConfig {
            localized_categories: Some(vec!["only one".to_string()]),
            ..PickerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: localized_categories must have 8 entries, got 1"
        );
    }

    #[test]
    fn category_label_defaults_to_key() {
        let config = PickerConfig::default();
        assert_eq!(config.category_label(Category::TravelPlaces), "Travel & Places");
    }

    #[test]
    fn category_label_is_positional() {
        let config = PickerConfig {
            localized_categories: Some(japanese_labels()),
            ..PickerConfig::default()
        };
        assert_eq!(config.category_label(Category::SmileysEmotion), "スマイリー");
        assert_eq!(config.category_label(Category::AnimalsNature), "動物");
        assert_eq!(config.category_label(Category::Symbols), "記号");
    }
}
