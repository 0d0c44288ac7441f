//! Finance Tracker - personal income/expense tracking with budgets
//!
//! Transactions and budgets are kept in two CSV files. On top of them the
//! crate derives category/month spend, budget overage warnings, an all-time
//! summary and a month-by-month report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, budgets, money and month keys
//! - `storage`: CSV record store
//! - `reports`: Aggregation, budget checks and report building
//! - `services`: Transaction entry and budget editing
//! - `export`: Writing reports to disk
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::TrackerPaths;
//! use finance_tracker::reports::{check_budget_warnings, MonthlyReport};
//! use finance_tracker::storage::Storage;
//!
//! let storage = Storage::new(TrackerPaths::new())?;
//! let transactions = storage.transactions.load()?;
//! let warnings = check_budget_warnings(&transactions, &storage.budgets.load()?);
//! print!("{}", MonthlyReport::generate(&transactions).format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
