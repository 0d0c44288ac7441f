//! Expense breakdowns by category
//!
//! Supplies the data behind the bar chart (all-time expense per category)
//! and the per-month pie chart (share of each category in one month).

use crate::models::{Money, MonthKey, Transaction};

use super::aggregate::CategoryTotals;

/// All-time expense total per category, in first-seen order
pub fn expenses_by_category(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        totals.add(&txn.category, txn.amount);
    }
    totals
}

/// One slice of a month's expense breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice {
    pub category: String,
    pub amount: Money,
    /// Share of the month's expenses, 0-100
    pub percentage: f64,
}

/// Expense breakdown for a single month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBreakdown {
    pub month: MonthKey,
    pub total: Money,
    pub slices: Vec<BreakdownSlice>,
}

impl MonthBreakdown {
    /// Break down one month's expenses, or `None` if it has none
    pub fn generate(transactions: &[Transaction], month: MonthKey) -> Option<Self> {
        let mut totals = CategoryTotals::new();
        for txn in transactions
            .iter()
            .filter(|t| t.is_expense() && month.contains(t.date))
        {
            totals.add(&txn.category, txn.amount);
        }

        if totals.is_empty() {
            return None;
        }

        let total = totals.total();
        let slices = totals
            .iter()
            .map(|entry| BreakdownSlice {
                category: entry.category.clone(),
                amount: entry.amount,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    entry.amount.as_f64() / total.as_f64() * 100.0
                },
            })
            .collect();

        Some(Self {
            month,
            total,
            slices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::txn;

    #[test]
    fn test_expenses_by_category_all_months() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "40"),
            txn("2024-02-05", "Rent", "expense", "900"),
            txn("2024-03-05", "Food", "expense", "60"),
            txn("2024-03-06", "Pay", "income", "2000"),
        ];

        let totals = expenses_by_category(&transactions);
        let rows: Vec<_> = totals
            .iter()
            .map(|e| (e.category.as_str(), e.amount))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Food", Money::from_dollars(100)),
                ("Rent", Money::from_dollars(900))
            ]
        );
    }

    #[test]
    fn test_no_expenses_is_empty() {
        let transactions = vec![txn("2024-03-06", "Pay", "income", "2000")];
        assert!(expenses_by_category(&transactions).is_empty());
    }

    #[test]
    fn test_month_breakdown_percentages() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "25"),
            txn("2024-01-06", "Rent", "expense", "75"),
            txn("2024-02-06", "Rent", "expense", "75"),
        ];

        let month = MonthKey::parse("2024-01").unwrap();
        let breakdown = MonthBreakdown::generate(&transactions, month).unwrap();
        assert_eq!(breakdown.total, Money::from_dollars(100));
        assert_eq!(breakdown.slices.len(), 2);
        assert!((breakdown.slices[0].percentage - 25.0).abs() < 1e-9);
        assert!((breakdown.slices[1].percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_without_expenses_is_none() {
        let transactions = vec![txn("2024-01-05", "Food", "expense", "25")];
        let month = MonthKey::parse("2024-07").unwrap();
        assert!(MonthBreakdown::generate(&transactions, month).is_none());
    }
}
