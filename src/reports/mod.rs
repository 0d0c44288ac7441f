//! Reports module for the finance tracker
//!
//! The reporting core: aggregation of transactions by category and month,
//! budget overage checks, the all-time summary, the monthly summary report
//! and the category breakdowns behind the charts. All of it is pure and
//! works on in-memory snapshots handed over by the storage layer.

pub mod aggregate;
pub mod breakdown;
pub mod budget_check;
pub mod monthly;
pub mod summary;

pub use aggregate::{
    aggregate_by_month, CategoryMonthSpend, CategorySpend, CategoryTotals, MonthlyAggregate,
};
pub use breakdown::{expenses_by_category, BreakdownSlice, MonthBreakdown};
pub use budget_check::{check_budget_warnings, evaluate_budgets, BudgetWarning};
pub use monthly::{MonthReport, MonthlyReport, DEFAULT_TOP_CATEGORIES, REPORT_TITLE};
pub use summary::Summary;
