//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports and budgets for terminal
//! display, including text charts, tables and colored warnings.

pub mod budget;
pub mod report;

pub use budget::format_budget_list;
pub use report::{format_expense_chart, format_month_breakdown, format_warning};
