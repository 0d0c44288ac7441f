//! Service layer for the finance tracker
//!
//! The service layer sits between the CLI and storage, handling validation
//! and the budget editing workflow.

pub mod budget;
pub mod transaction;

pub use budget::{apply_batch, apply_command, BatchOutcome, BudgetChange, BudgetCommand, BudgetService};
pub use transaction::{NewTransaction, TransactionService};
