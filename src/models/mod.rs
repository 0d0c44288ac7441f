//! Core data models for the finance tracker
//!
//! Transactions, budgets, money amounts and the month keys used to bucket
//! them for reporting.

pub mod budget;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{BudgetBook, BudgetEntry};
pub use money::{Money, MoneyParseError};
pub use month::MonthKey;
pub use transaction::{Transaction, TransactionKind};
