//! Application configuration
//!
//! Loaded from (in order of priority):
//! 1. Runtime environment variables (individual overrides)
//! 2. JSON file (~/.config/beacon/config.json)
//! 3. Built-in defaults

use anyhow::{Context, Result, bail};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

use crate::settings::Settings;
use crate::zoom::{MAX_ZOOM_PERCENTAGE, RESIZE_DEBOUNCE, ZOOM_STEP, ZoomConfig};

/// Config filename in the Beacon config directory
const CONFIG_FILE: &str = "config.json";

/// Overrides the resize debounce delay, in milliseconds
const DEBOUNCE_ENV: &str = "BEACON_RESIZE_DEBOUNCE_MS";

/// Largest zoom step accepted from config
const MAX_ZOOM_STEP: i32 = 100;

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub resize_debounce_ms: u64,
    pub zoom_step: i32,
    pub max_zoom_percentage: i32,
    /// Settings the in-memory store starts with
    pub settings: Settings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: RESIZE_DEBOUNCE.as_millis() as u64,
            zoom_step: ZOOM_STEP,
            max_zoom_percentage: MAX_ZOOM_PERCENTAGE,
            settings: Settings::default(),
        }
    }
}

impl AppConfig {
    /// Load the config file if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = if config::config_exists(CONFIG_FILE) {
            Self::from_value(config::load_json(CONFIG_FILE)?)?
        } else {
            Self::default()
        };

        Ok(config.with_debounce_override(std::env::var(DEBOUNCE_ENV).ok().as_deref()))
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value = serde_json::from_str(json).context("Failed to parse config JSON")?;
        Self::from_value(value)
    }

    /// Build from parsed JSON, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            bail!("Config must be a JSON object");
        }
        serde_json::from_value(value).context("Invalid config")
    }

    /// Apply a raw debounce override; unparsable values are ignored
    pub fn with_debounce_override(mut self, value: Option<&str>) -> Self {
        if let Some(raw) = value {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.resize_debounce_ms = ms,
                Err(e) => warn!("Ignoring {}={:?}: {}", DEBOUNCE_ENV, raw, e),
            }
        }
        self
    }

    /// Zoom tunables, with out-of-range values replaced by the defaults
    pub fn zoom_config(&self) -> ZoomConfig {
        let step = if (1..=MAX_ZOOM_STEP).contains(&self.zoom_step) {
            self.zoom_step
        } else {
            warn!(
                "Ignoring zoomStep {}: must be between 1 and {}",
                self.zoom_step, MAX_ZOOM_STEP
            );
            ZOOM_STEP
        };

        let max_percentage = if self.max_zoom_percentage > 0 {
            self.max_zoom_percentage
        } else {
            warn!(
                "Ignoring maxZoomPercentage {}: must be positive",
                self.max_zoom_percentage
            );
            MAX_ZOOM_PERCENTAGE
        };

        ZoomConfig {
            debounce: Duration::from_millis(self.resize_debounce_ms),
            step,
            max_percentage,
        }
    }

    /// Get the default config file path (~/.config/beacon/config.json)
    pub fn default_config_path() -> Option<PathBuf> {
        config::config_path(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_zoom_constants() {
        let config = AppConfig::default();
        assert_eq!(config.zoom_config(), ZoomConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "resizeDebounceMs": 350,
            "settings": { "theme": "DARK", "showPills": false }
        }"#;

        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.resize_debounce_ms, 350);
        assert_eq!(config.zoom_step, 10);
        assert_eq!(config.settings.theme, Theme::Dark);
        assert!(!config.settings.show_pills);
        assert_eq!(config.zoom_config().debounce, Duration::from_millis(350));
    }

    #[test]
    fn test_invalid_json() {
        assert!(AppConfig::from_json("{ \"zoomStep\": ").is_err());
        assert!(AppConfig::from_json(r#"{ "zoomStep": "ten" }"#).is_err());
    }

    #[test]
    fn test_rejects_non_object() {
        // Serde would otherwise read an array as positional fields
        let err = AppConfig::from_json("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("JSON object"));
        assert!(AppConfig::from_json("42").is_err());
    }

    #[test]
    fn test_from_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "maxZoomPercentage": 150 }"#).unwrap();

        let value = config::load_json_file(&path).unwrap();
        let config = AppConfig::from_value(value).unwrap();
        assert_eq!(config.max_zoom_percentage, 150);
        assert_eq!(config.zoom_config().max_percentage, 150);
    }

    #[test]
    fn test_out_of_range_zoom_tunables_fall_back() {
        let config = AppConfig::from_json(
            r#"{ "zoomStep": 2147483647, "maxZoomPercentage": -5 }"#,
        )
        .unwrap();
        let zoom = config.zoom_config();
        assert_eq!(zoom.step, ZOOM_STEP);
        assert_eq!(zoom.max_percentage, MAX_ZOOM_PERCENTAGE);

        let config = AppConfig {
            zoom_step: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.zoom_config().step, ZOOM_STEP);

        let config = AppConfig {
            zoom_step: 25,
            ..AppConfig::default()
        };
        assert_eq!(config.zoom_config().step, 25);
    }

    #[test]
    fn test_debounce_override() {
        let config = AppConfig::default().with_debounce_override(Some(" 50 "));
        assert_eq!(config.resize_debounce_ms, 50);

        let config = AppConfig::default().with_debounce_override(Some("soon"));
        assert_eq!(config.resize_debounce_ms, 200);

        let config = AppConfig::default().with_debounce_override(None);
        assert_eq!(config.resize_debounce_ms, 200);
    }
}
