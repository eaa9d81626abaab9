//! Overlay configuration
//!
//! One JSON object read once at startup. Every failure mode (missing
//! file, unreadable bytes, malformed JSON, wrong root type) falls back
//! to the built-in defaults with a single diagnostic; a bad config
//! never stops the overlay from coming up.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{info, warn};

use crate::constants::defaults;

/// Overlay settings as read from `config.json`.
///
/// Unknown keys are ignored; missing keys take the defaults below. A
/// recognized key holding a non-convertible value fails the whole
/// parse, which [`load`] turns into the full default config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_margin_right")]
    pub margin_right: i32,
    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: i32,
}

fn default_text() -> String {
    defaults::TEXT.to_string()
}

fn default_margin_right() -> i32 {
    defaults::MARGIN_RIGHT
}

fn default_margin_bottom() -> i32 {
    defaults::MARGIN_BOTTOM
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            text: default_text(),
            margin_right: default_margin_right(),
            margin_bottom: default_margin_bottom(),
        }
    }
}

/// Load the overlay config from `path`, or the defaults when the file
/// is missing or malformed. Never fails.
pub fn load(path: &Path) -> OverlayConfig {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return OverlayConfig::default();
    }

    match read(path) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), "failed to read config, using defaults: {err:#}");
            OverlayConfig::default()
        }
    }
}

fn read(path: &Path) -> Result<OverlayConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse JSON from {}", path.display()))?;
    if !value.is_object() {
        bail!("config root must be a JSON object");
    }

    serde_json::from_value(value)
        .with_context(|| format!("invalid config values in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load(&dir.path().join("does-not-exist.json"));

        assert_eq!(config, OverlayConfig::default());
        assert_eq!(config.text, defaults::TEXT);
        assert_eq!(config.margin_right, 24);
        assert_eq!(config.margin_bottom, 24);
    }

    #[test]
    fn well_formed_config_passes_through() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"text": "hello", "margin_right": 10, "margin_bottom": 5}"#,
        );

        let config = load(&path);
        assert_eq!(config.text, "hello");
        assert_eq!(config.margin_right, 10);
        assert_eq!(config.margin_bottom, 5);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"text": "hello", "font": "monospace", "opacity": 0.5}"#,
        );

        let config = load(&path);
        assert_eq!(config.text, "hello");
        assert_eq!(config.margin_right, 24);
        assert_eq!(config.margin_bottom, 24);
    }

    #[test]
    fn partial_config_fills_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"margin_bottom": 100}"#);

        let config = load(&path);
        assert_eq!(config.text, defaults::TEXT);
        assert_eq!(config.margin_right, 24);
        assert_eq!(config.margin_bottom, 100);
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "not json");

        assert_eq!(load(&path), OverlayConfig::default());
    }

    #[test]
    fn array_root_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"["text", "margin_right"]"#);

        assert_eq!(load(&path), OverlayConfig::default());
    }

    #[test]
    fn scalar_root_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#""just a string""#);

        assert_eq!(load(&path), OverlayConfig::default());
    }

    #[test]
    fn non_integer_margin_fails_the_whole_load() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"text": "kept?", "margin_right": "wide"}"#);

        // One bad value reverts everything, including the good text.
        assert_eq!(load(&path), OverlayConfig::default());
    }
}
