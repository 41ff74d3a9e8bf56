//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use backoffice_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "backoffice";

/// Environment variable overriding `api.base_url`
pub const BASE_URL_ENV: &str = "BACKOFFICE_BASE_URL";

const DEFAULT_CONFIG: &str = r#"# Backoffice Configuration

[api]
base_url = "http://localhost:5000"   # Admin API origin (overridden by BACKOFFICE_BASE_URL)
timeout_secs = 30                    # Per-request timeout

[behavior]
page_size = 10                       # Rows per page on paginated lists
search_debounce_ms = 500             # Quiet period before a server-side search
notification_secs = 3                # How long notifications stay visible
confirm_quit = false                 # Ask before quitting

[retry]
max_attempts = 3                     # Services list fetch attempts
base_delay_ms = 1000                 # Backoff: base * 2^attempt

[ui]
sidebar_collapsed = false            # Start with the sidebar collapsed
"#;

/// `<config_dir>/backoffice/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or the default location when `None`.
///
/// A missing or unparsable file falls back to defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            debug!("No config directory available, using defaults");
            return Settings::default();
        }
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `BACKOFFICE_BASE_URL` and then the command-line flag, which wins
pub fn apply_overrides(settings: &mut Settings, base_url_flag: Option<&str>) {
    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        if !url.trim().is_empty() {
            debug!("Base URL from {}: {}", BASE_URL_ENV, url);
            settings.api.base_url = url.trim().to_string();
        }
    }
    if let Some(url) = base_url_flag {
        settings.api.base_url = url.trim().to_string();
    }
}

/// Write a commented default config file. Existing files are left alone.
pub fn init_config_file(path: Option<&Path>) -> Result<PathBuf> {
    let config_path = path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("No config directory available"))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
    } else {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_default_file_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        let written = init_config_file(Some(&path)).unwrap();
        assert_eq!(written, path);
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[behavior]\npage_size = 50\n").unwrap();

        init_config_file(Some(&path)).unwrap();
        assert_eq!(load_settings(Some(&path)).behavior.page_size, 50);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_and_flag_overrides_env() {
        let mut settings = Settings::default();

        std::env::set_var(BASE_URL_ENV, "http://env:9000");
        apply_overrides(&mut settings, None);
        assert_eq!(settings.api.base_url, "http://env:9000");

        apply_overrides(&mut settings, Some("http://flag:7000"));
        assert_eq!(settings.api.base_url, "http://flag:7000");

        std::env::remove_var(BASE_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_blank_env_is_ignored() {
        let mut settings = Settings::default();
        std::env::set_var(BASE_URL_ENV, "  ");
        apply_overrides(&mut settings, None);
        assert_eq!(settings.api.base_url, "http://localhost:5000");
        std::env::remove_var(BASE_URL_ENV);
    }
}
