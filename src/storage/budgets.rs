//! Budget repository for CSV storage
//!
//! Budgets live in `budgets.csv` with columns `category, monthly_limit`. The
//! file is always rewritten whole; the last writer wins.

use std::path::{Path, PathBuf};

use crate::error::TrackerError;
use crate::models::{BudgetBook, BudgetEntry};

use super::file_io::{read_csv, write_csv_atomic};

/// Column order of `budgets.csv`
pub const BUDGET_HEADERS: &[&str] = &["category", "monthly_limit"];

/// Repository for budget persistence
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full category -> limit mapping; a missing file is an empty book
    pub fn load(&self) -> Result<BudgetBook, TrackerError> {
        let entries: Vec<BudgetEntry> = read_csv(&self.path)?;
        let book: BudgetBook = entries.into_iter().collect();
        tracing::debug!(count = book.len(), path = %self.path.display(), "loaded budgets");
        Ok(book)
    }

    /// Replace the persisted mapping with `book`
    pub fn replace(&self, book: &BudgetBook) -> Result<(), TrackerError> {
        write_csv_atomic(&self.path, BUDGET_HEADERS, &book.entries())?;
        tracing::info!(count = book.len(), "saved budgets");
        Ok(())
    }
}
