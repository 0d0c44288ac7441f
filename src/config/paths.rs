//! Path management for the finance tracker
//!
//! Every file the tracker touches lives under one base directory, passed
//! around explicitly rather than held in a global.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (`~/.local/share/fintrack`, `%APPDATA%\fintrack\data`, ...)
//! 3. `./.fintrack` when no home directory can be determined

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

/// Manages all paths used by the tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all tracker data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory from the environment or platform defaults
    pub fn new() -> Self {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Self { base_dir }
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to transactions.csv
    pub fn transactions_file(&self) -> PathBuf {
        self.base_dir.join("transactions.csv")
    }

    /// Get the path to budgets.csv
    pub fn budgets_file(&self) -> PathBuf {
        self.base_dir.join("budgets.csv")
    }

    /// Resolve a report file name against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn report_file(&self, name: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "fintrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".fintrack"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("transactions.csv")
        );
        assert_eq!(paths.budgets_file(), temp_dir.path().join("budgets.csv"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
    }

    #[test]
    fn test_report_file_relative_and_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());

        assert_eq!(
            paths.report_file("monthly_report.txt"),
            temp_dir.path().join("monthly_report.txt")
        );

        let absolute = temp_dir.path().join("elsewhere").join("r.txt");
        assert_eq!(paths.report_file(&absolute), absolute);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
