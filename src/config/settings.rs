//! User settings for the finance tracker
//!
//! Settings are optional: a missing `settings.json` means defaults, and any
//! field missing from the file falls back to its default.

use serde::Deserialize;

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Currency symbol printed in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many categories the monthly report ranks per month
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// File name (relative to the data directory) for exported reports
    #[serde(default = "default_report_file")]
    pub report_file: String,

    /// Whether budget warnings are highlighted with ANSI colors
    #[serde(default = "default_colored_warnings")]
    pub colored_warnings: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_top_categories() -> usize {
    3
}

fn default_report_file() -> String {
    "monthly_report.txt".to_string()
}

fn default_colored_warnings() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            top_categories: default_top_categories(),
            report_file: default_report_file(),
            colored_warnings: default_colored_warnings(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        tracing::debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.top_categories, 3);
        assert_eq!(settings.report_file, "monthly_report.txt");
        assert!(settings.colored_warnings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        assert_eq!(Settings::load_or_default(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_custom_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency_symbol": "€", "top_categories": 5, "report_file": "out.txt"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(
            loaded,
            Settings {
                currency_symbol: "€".into(),
                top_categories: 5,
                report_file: "out.txt".into(),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), r#"{"colored_warnings": false}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert!(!loaded.colored_warnings);
        assert_eq!(loaded.top_categories, 3);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(TrackerError::Config(_))
        ));
    }
}
