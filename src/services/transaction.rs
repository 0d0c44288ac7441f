//! Transaction service
//!
//! Records new transactions and hands out fresh snapshots of the stored ones.
//! There is no edit or delete: the transaction file only grows.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Input for a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: String,
    pub category: String,
    /// Raw type text; trimmed and lower-cased before storing
    pub kind: String,
    pub amount: Money,
    /// Defaults to today (local time)
    pub date: Option<NaiveDate>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Build a transaction and append it to storage
    pub fn record(&self, input: NewTransaction) -> TrackerResult<Transaction> {
        let kind = input.kind.trim().to_lowercase();
        if kind.is_empty() {
            return Err(TrackerError::Validation(
                "Transaction type cannot be empty".into(),
            ));
        }

        let kind = TransactionKind::from(kind);
        if let TransactionKind::Other(raw) = &kind {
            tracing::warn!(kind = %raw, "unrecognized transaction type will not count towards totals");
        }

        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let transaction = Transaction::new(date, input.description, input.category, kind, input.amount);

        self.storage.transactions.append(&transaction)?;
        Ok(transaction)
    }

    /// All stored transactions, in file order
    pub fn list(&self) -> TrackerResult<Vec<Transaction>> {
        self.storage.transactions.load()
    }
}
