//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_chart_command, handle_monthly_report, handle_summary, ChartCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
