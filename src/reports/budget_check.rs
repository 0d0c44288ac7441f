//! Budget evaluation
//!
//! Compares (category, month) expense spend against the per-category monthly
//! limits and reports every bucket that went over.

use std::fmt;

use crate::models::{BudgetBook, Money, MonthKey, Transaction};

use super::aggregate::CategoryMonthSpend;

/// A category whose spend in one month strictly exceeded its limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetWarning {
    pub category: String,
    pub month: MonthKey,
    pub spent: Money,
    pub limit: Money,
}

impl BudgetWarning {
    /// How far over the limit the spend went
    pub fn overage(&self) -> Money {
        self.spent - self.limit
    }

    /// Render with a specific currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!(
            "WARNING: You spent {} in {} for {}, over your {} budget!",
            self.spent.format_with_symbol(symbol),
            self.category,
            self.month,
            self.limit.format_with_symbol(symbol)
        )
    }
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Evaluate every (category, month) bucket against the budget
///
/// Warnings are ordered by month, then category. Categories without a limit
/// never warn, and spend equal to the limit is not over it.
pub fn evaluate_budgets(spend: &CategoryMonthSpend, budgets: &BudgetBook) -> Vec<BudgetWarning> {
    let warnings: Vec<BudgetWarning> = spend
        .iter()
        .filter_map(|(category, month, spent)| {
            let limit = budgets.limit(category)?;
            (spent > limit).then(|| BudgetWarning {
                category: category.to_string(),
                month,
                spent,
                limit,
            })
        })
        .collect();

    tracing::debug!(
        buckets = spend.len(),
        budgets = budgets.len(),
        warnings = warnings.len(),
        "evaluated budgets"
    );
    warnings
}

/// Aggregate and evaluate in one step
pub fn check_budget_warnings(
    transactions: &[Transaction],
    budgets: &BudgetBook,
) -> Vec<BudgetWarning> {
    evaluate_budgets(&CategoryMonthSpend::from_transactions(transactions), budgets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::txn;

    fn book(entries: &[(&str, i64)]) -> BudgetBook {
        entries
            .iter()
            .map(|(c, d)| (*c, Money::from_dollars(*d)))
            .collect()
    }

    #[test]
    fn test_scenario_single_warning() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "40"),
            txn("2024-01-10", "Food", "expense", "70"),
            txn("2024-01-15", "Pay", "income", "1000"),
        ];

        let warnings = check_budget_warnings(&transactions, &book(&[("Food", 100)]));
        assert_eq!(
            warnings,
            vec![BudgetWarning {
                category: "Food".into(),
                month: MonthKey::parse("2024-01").unwrap(),
                spent: Money::from_dollars(110),
                limit: Money::from_dollars(100),
            }]
        );
        assert_eq!(warnings[0].overage(), Money::from_dollars(10));
        assert_eq!(
            warnings[0].to_string(),
            "WARNING: You spent $110.00 in Food for 2024-01, over your $100.00 budget!"
        );
    }

    #[test]
    fn test_spend_equal_to_limit_does_not_warn() {
        let transactions = vec![txn("2024-01-05", "Food", "expense", "100.00")];
        assert!(check_budget_warnings(&transactions, &book(&[("Food", 100)])).is_empty());

        let one_cent_over = vec![txn("2024-01-05", "Food", "expense", "100.01")];
        assert_eq!(
            check_budget_warnings(&one_cent_over, &book(&[("Food", 100)])).len(),
            1
        );
    }

    #[test]
    fn test_unbudgeted_categories_pass_silently() {
        let transactions = vec![txn("2024-01-05", "Travel", "expense", "5000")];
        assert!(check_budget_warnings(&transactions, &book(&[("Food", 100)])).is_empty());
        assert!(check_budget_warnings(&transactions, &BudgetBook::new()).is_empty());
    }

    #[test]
    fn test_income_never_counts_against_budget() {
        let transactions = vec![txn("2024-01-05", "Food", "income", "500")];
        assert!(check_budget_warnings(&transactions, &book(&[("Food", 100)])).is_empty());
    }

    #[test]
    fn test_huge_spend_still_warns() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "90000000000000000"),
            txn("2024-01-06", "Food", "expense", "90000000000000000"),
        ];
        let warnings = check_budget_warnings(&transactions, &book(&[("Food", 100)]));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].spent, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_limit_applies_to_each_month_separately() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "60"),
            txn("2024-02-05", "Food", "expense", "60"),
        ];
        assert!(check_budget_warnings(&transactions, &book(&[("Food", 100)])).is_empty());
    }

    #[test]
    fn test_warnings_sorted_by_month_then_category() {
        let transactions = vec![
            txn("2024-03-01", "Rent", "expense", "1000"),
            txn("2024-01-01", "Rent", "expense", "1000"),
            txn("2024-03-02", "Food", "expense", "200"),
        ];
        let warnings = check_budget_warnings(&transactions, &book(&[("Food", 100), ("Rent", 900)]));

        let order: Vec<_> = warnings
            .iter()
            .map(|w| format!("{} {}", w.month, w.category))
            .collect();
        assert_eq!(order, vec!["2024-01 Rent", "2024-03 Food", "2024-03 Rent"]);
    }

    #[test]
    fn test_format_with_other_symbol() {
        let warning = BudgetWarning {
            category: "Food".into(),
            month: MonthKey::parse("2024-01").unwrap(),
            spent: Money::from_cents(12345),
            limit: Money::from_dollars(100),
        };
        assert_eq!(
            warning.format_with_symbol("€"),
            "WARNING: You spent €123.45 in Food for 2024-01, over your €100.00 budget!"
        );
    }
}
