//! Transaction repository for CSV storage
//!
//! Transactions live in `transactions.csv` with columns
//! `date, description, category, type, amount`. The file is append-only.

use std::path::{Path, PathBuf};

use crate::error::TrackerError;
use crate::models::Transaction;

use super::file_io::{append_csv_row, read_csv};

/// Column order of `transactions.csv`
pub const TRANSACTION_HEADERS: &[&str] = &["date", "description", "category", "type", "amount"];

/// Repository for transaction persistence
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    path: PathBuf,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every transaction in file order
    ///
    /// A missing file yields no transactions. A malformed date or amount
    /// fails the whole load.
    pub fn load(&self) -> Result<Vec<Transaction>, TrackerError> {
        let transactions: Vec<Transaction> = read_csv(&self.path)?;
        tracing::debug!(
            count = transactions.len(),
            path = %self.path.display(),
            "loaded transactions"
        );
        Ok(transactions)
    }

    /// Append one transaction to the end of the file
    pub fn append(&self, transaction: &Transaction) -> Result<(), TrackerError> {
        append_csv_row(&self.path, TRANSACTION_HEADERS, transaction)?;
        tracing::info!(
            date = %transaction.date,
            category = %transaction.category,
            kind = %transaction.kind,
            amount = %transaction.amount,
            "appended transaction"
        );
        Ok(())
    }
}
