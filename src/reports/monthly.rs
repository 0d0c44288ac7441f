//! Monthly Summary Report
//!
//! One block per month, oldest first: income, expense, balance and the
//! month's biggest spending categories.

use crate::models::{Money, MonthKey, Transaction};

use super::aggregate::{aggregate_by_month, CategorySpend};

/// Title line of the rendered report
pub const REPORT_TITLE: &str = "--- Monthly Summary Report ---";

/// Number of categories ranked per month unless configured otherwise
pub const DEFAULT_TOP_CATEGORIES: usize = 3;

/// Figures for a single month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthReport {
    pub month: MonthKey,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
    /// Largest spending categories, largest first
    pub top_categories: Vec<CategorySpend>,
}

/// Monthly Summary Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    pub months: Vec<MonthReport>,
    /// How many categories were requested per month
    pub top_n: usize,
}

impl MonthlyReport {
    /// Build the report with the default top-3 ranking
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self::generate_with_top(transactions, DEFAULT_TOP_CATEGORIES)
    }

    /// Build the report ranking up to `top_n` categories per month
    pub fn generate_with_top(transactions: &[Transaction], top_n: usize) -> Self {
        let months = aggregate_by_month(transactions)
            .into_iter()
            .map(|(month, data)| MonthReport {
                month,
                income: data.income,
                expense: data.expense,
                balance: data.balance(),
                top_categories: data.categories.top(top_n),
            })
            .collect();

        Self { months, top_n }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Render as text with `$` amounts
    pub fn format_terminal(&self) -> String {
        self.format_with_symbol("$")
    }

    /// Render as text
    ///
    /// The title is followed by one block per month, each preceded by a blank
    /// line. With no months only the title is printed. The result ends with a
    /// newline.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(REPORT_TITLE);
        output.push('\n');

        for month in &self.months {
            output.push('\n');
            output.push_str(&format!("{}\n", month.month));
            output.push_str(&format!(
                "  Income:  {}\n",
                month.income.format_with_symbol(symbol)
            ));
            output.push_str(&format!(
                "  Expense: {}\n",
                month.expense.format_with_symbol(symbol)
            ));
            output.push_str(&format!(
                "  Balance: {}\n",
                month.balance.format_with_symbol(symbol)
            ));

            if !month.top_categories.is_empty() {
                output.push_str(&format!("  Top {} Spending Categories:\n", self.top_n));
                for category in &month.top_categories {
                    output.push_str(&format!(
                        "    - {}: {}\n",
                        category.category,
                        category.amount.format_with_symbol(symbol)
                    ));
                }
            }
        }

        output
    }
}
