//! Configuration management for the picker.
//!
//! Host-facing options ([`settings::PickerConfig`]) can be built in code
//! or loaded from a TOML file, and are validated once when the picker is
//! constructed.

pub mod settings;
