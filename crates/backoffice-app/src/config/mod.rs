//! Configuration file parsing for Backoffice
//!
//! Supports `<config_dir>/backoffice/config.toml` (or an explicit path) with
//! environment and command-line overrides for the API base URL.

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, default_config_path, init_config_file, load_settings, BASE_URL_ENV,
};
pub use types::*;
