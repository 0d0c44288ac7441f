//! Transaction aggregation
//!
//! Groups a flat list of transactions by (category, month) and by month.
//! Everything here is a pure function of its input slice.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Money, MonthKey, Transaction};

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Money,
}

/// Per-category totals that remember the order categories were first seen
///
/// Ranking relies on that order to break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<CategorySpend>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to a category, creating it at zero on first sight
    pub fn add(&mut self, category: &str, amount: Money) {
        match self.index.get(category) {
            Some(&i) => self.entries[i].amount += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategorySpend {
                    category: category.to_string(),
                    amount,
                });
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.index.get(category).map(|&i| self.entries[i].amount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CategorySpend> {
        self.entries.iter()
    }

    /// Sum over every category
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// The `limit` largest non-zero categories, largest first
    ///
    /// Equal amounts keep first-seen order.
    pub fn top(&self, limit: usize) -> Vec<CategorySpend> {
        let mut ranked: Vec<CategorySpend> = self
            .entries
            .iter()
            .filter(|e| !e.amount.is_zero())
            .cloned()
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked.truncate(limit);
        ranked
    }
}

/// Expense spend keyed by (category, month)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMonthSpend {
    // Keyed month-first so iteration is ordered by month, then category
    buckets: BTreeMap<(MonthKey, String), Money>,
}

impl CategoryMonthSpend {
    /// Sum every expense into its (category, month) bucket
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut spend = Self::default();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            spend.add(&txn.category, txn.month_key(), txn.amount);
        }
        spend
    }

    /// Upsert-accumulate into a bucket
    pub fn add(&mut self, category: &str, month: MonthKey, amount: Money) {
        *self
            .buckets
            .entry((month, category.to_string()))
            .or_insert_with(Money::zero) += amount;
    }

    pub fn get(&self, category: &str, month: MonthKey) -> Option<Money> {
        self.buckets.get(&(month, category.to_string())).copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate as (category, month, spent), ordered by month then category
    pub fn iter(&self) -> impl Iterator<Item = (&str, MonthKey, Money)> {
        self.buckets
            .iter()
            .map(|((month, category), spent)| (category.as_str(), *month, *spent))
    }
}

/// Income, expense and per-category expense for one month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyAggregate {
    pub income: Money,
    pub expense: Money,
    pub categories: CategoryTotals,
}

impl MonthlyAggregate {
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// Aggregate transactions per month, ordered chronologically
///
/// A month appears as soon as any transaction falls in it, even one of an
/// unrecognized kind, in which case its totals stay at zero.
pub fn aggregate_by_month(transactions: &[Transaction]) -> BTreeMap<MonthKey, MonthlyAggregate> {
    let mut months: BTreeMap<MonthKey, MonthlyAggregate> = BTreeMap::new();

    for txn in transactions {
        let month = months.entry(txn.month_key()).or_default();
        if txn.is_income() {
            month.income += txn.amount;
        } else if txn.is_expense() {
            month.expense += txn.amount;
            month.categories.add(&txn.category, txn.amount);
        }
    }

    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::txn;

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn test_category_month_spend_scenario() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "40"),
            txn("2024-01-10", "Food", "expense", "70"),
            txn("2024-01-15", "Pay", "income", "1000"),
        ];

        let spend = CategoryMonthSpend::from_transactions(&transactions);
        assert_eq!(spend.len(), 1);
        assert_eq!(
            spend.get("Food", month("2024-01")),
            Some(Money::from_dollars(110))
        );
        assert_eq!(spend.get("Pay", month("2024-01")), None);
    }

    #[test]
    fn test_category_month_spend_separates_months_and_case() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "10"),
            txn("2024-02-05", "Food", "expense", "20"),
            txn("2024-02-06", "food", "expense", "5"),
        ];

        let spend = CategoryMonthSpend::from_transactions(&transactions);
        assert_eq!(spend.len(), 3);
        assert_eq!(spend.get("Food", month("2024-02")), Some(Money::from_dollars(20)));
        assert_eq!(spend.get("food", month("2024-02")), Some(Money::from_dollars(5)));

        let order: Vec<_> = spend
            .iter()
            .map(|(c, m, _)| format!("{}/{}", m, c))
            .collect();
        assert_eq!(order, vec!["2024-01/Food", "2024-02/Food", "2024-02/food"]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "40"),
            txn("2024-02-15", "Pay", "income", "1000"),
        ];

        assert_eq!(
            CategoryMonthSpend::from_transactions(&transactions),
            CategoryMonthSpend::from_transactions(&transactions)
        );
        assert_eq!(
            aggregate_by_month(&transactions),
            aggregate_by_month(&transactions)
        );
    }

    #[test]
    fn test_monthly_conservation() {
        let transactions = vec![
            txn("2024-01-05", "Food", "expense", "40.25"),
            txn("2024-01-07", "Rent", "expense", "900"),
            txn("2024-01-15", "Pay", "income", "1000"),
            txn("2024-01-20", "Food", "expense", "9.75"),
        ];

        let months = aggregate_by_month(&transactions);
        let jan = &months[&month("2024-01")];
        assert_eq!(jan.income, Money::from_dollars(1000));
        assert_eq!(jan.expense, Money::from_dollars(950));
        assert_eq!(jan.balance(), jan.income - jan.expense);
        assert_eq!(jan.categories.total(), jan.expense);
        assert_eq!(jan.categories.get("Food"), Some(Money::from_dollars(50)));
    }

    #[test]
    fn test_unknown_kind_opens_month_without_totals() {
        let transactions = vec![txn("2024-04-01", "Misc", "transfer", "50")];

        let months = aggregate_by_month(&transactions);
        let april = &months[&month("2024-04")];
        assert!(april.income.is_zero());
        assert!(april.expense.is_zero());
        assert!(april.categories.is_empty());
        assert!(CategoryMonthSpend::from_transactions(&transactions).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(CategoryMonthSpend::from_transactions(&[]).is_empty());
        assert!(aggregate_by_month(&[]).is_empty());
    }

    #[test]
    fn test_months_are_sorted() {
        let transactions = vec![
            txn("2024-03-01", "Food", "expense", "1"),
            txn("2024-01-01", "Food", "expense", "1"),
        ];
        let keys: Vec<_> = aggregate_by_month(&transactions)
            .keys()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(keys, vec!["2024-01", "2024-03"]);
    }

    #[test]
    fn test_top_ranking_ties_keep_insertion_order() {
        let mut totals = CategoryTotals::new();
        totals.add("A", Money::from_dollars(50));
        totals.add("B", Money::from_dollars(120));
        totals.add("C", Money::from_dollars(30));
        totals.add("D", Money::from_dollars(120));

        let top: Vec<_> = totals.top(3).into_iter().map(|c| c.category).collect();
        assert_eq!(top, vec!["B", "D", "A"]);
    }

    #[test]
    fn test_top_skips_zero_and_handles_short_lists() {
        let mut totals = CategoryTotals::new();
        totals.add("Free", Money::zero());
        totals.add("Food", Money::from_dollars(5));

        let top = totals.top(3);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].category, "Food");
        assert!(CategoryTotals::new().top(3).is_empty());
    }
}
