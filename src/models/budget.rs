//! Budget model
//!
//! A budget is a single monthly spending limit per category. The same limit
//! applies to every month; there is no per-period history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;

/// One row of `budgets.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub category: String,
    pub monthly_limit: Money,
}

impl BudgetEntry {
    pub fn new(category: impl Into<String>, monthly_limit: Money) -> Self {
        Self {
            category: category.into(),
            monthly_limit,
        }
    }
}

/// The full category -> monthly limit mapping
///
/// Categories are unique and kept in name order so the persisted file and
/// listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetBook {
    limits: BTreeMap<String, Money>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monthly limit for a category, if one is set
    pub fn limit(&self, category: &str) -> Option<Money> {
        self.limits.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.limits.contains_key(category)
    }

    /// Set a limit, returning the previous one
    pub fn set_limit(&mut self, category: impl Into<String>, limit: Money) -> Option<Money> {
        self.limits.insert(category.into(), limit)
    }

    /// Remove a category, returning its limit
    pub fn remove(&mut self, category: &str) -> Option<Money> {
        self.limits.remove(category)
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Iterate over (category, limit) in category order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.limits.iter().map(|(c, l)| (c.as_str(), *l))
    }

    /// Rows in the order they are persisted
    pub fn entries(&self) -> Vec<BudgetEntry> {
        self.iter()
            .map(|(category, limit)| BudgetEntry::new(category, limit))
            .collect()
    }
}

impl FromIterator<BudgetEntry> for BudgetBook {
    /// Later rows for the same category win, matching a plain dictionary load
    fn from_iter<I: IntoIterator<Item = BudgetEntry>>(iter: I) -> Self {
        Self {
            limits: iter
                .into_iter()
                .map(|e| (e.category, e.monthly_limit))
                .collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, Money)> for BudgetBook {
    fn from_iter<I: IntoIterator<Item = (S, Money)>>(iter: I) -> Self {
        Self {
            limits: iter.into_iter().map(|(c, l)| (c.into(), l)).collect(),
        }
    }
}
