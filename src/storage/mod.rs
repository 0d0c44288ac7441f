//! Storage layer for the finance tracker
//!
//! The record store: CSV files for transactions and budgets, with atomic
//! rewrites and automatic directory creation. Every load returns a fresh
//! snapshot; nothing is cached between commands.

pub mod budgets;
pub mod file_io;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{append_csv_row, read_csv, write_csv_atomic, write_text_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Storage coordinator that provides access to both repositories
#[derive(Debug, Clone)]
pub struct Storage {
    paths: TrackerPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("fintrack");
        let storage = Storage::new(TrackerPaths::with_base_dir(&base)).unwrap();

        assert!(base.exists());
        assert!(storage.transactions.load().unwrap().is_empty());
        assert!(storage.budgets.load().unwrap().is_empty());
        assert_eq!(storage.paths().base_dir(), base.as_path());
    }
}
