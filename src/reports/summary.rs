//! All-time income/expense summary

use crate::models::{Money, Transaction};

/// Income, expense and balance across every transaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut summary, txn| {
                if txn.is_income() {
                    summary.total_income += txn.amount;
                } else if txn.is_expense() {
                    summary.total_expense += txn.amount;
                }
                summary
            })
    }

    pub fn balance(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// The three summary lines, without trailing newline
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!(
            "Total Income: {}\nTotal Expenses: {}\nBalance: {}",
            self.total_income.format_with_symbol(symbol),
            self.total_expense.format_with_symbol(symbol),
            self.balance().format_with_symbol(symbol)
        )
    }
}
