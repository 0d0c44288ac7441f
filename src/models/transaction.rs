//! Transaction model
//!
//! A transaction is an immutable income or expense record. Transactions are
//! only ever created and appended; nothing edits or removes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::MonthKey;

/// Kind of a transaction as stored in the `type` column
///
/// Values other than `income` and `expense` are kept verbatim so they survive
/// a round trip through storage, but they never count towards any total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Income,
    Expense,
    Other(String),
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for TransactionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "income" => Self::Income,
            "expense" => Self::Expense,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A financial transaction, one row of `transactions.csv`
///
/// Field order matches the column order `date, description, category, type, amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Free text description
    #[serde(default)]
    pub description: String,

    /// Category label, case-sensitive
    #[serde(default)]
    pub category: String,

    /// Income, expense, or an unrecognized kind
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount, normally non-negative
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        kind: impl Into<TransactionKind>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category: category.into(),
            kind: kind.into(),
            amount,
        }
    }

    /// The month this transaction is bucketed into
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {} {}",
            self.date, self.kind, self.category, self.amount, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_from_string() {
        assert_eq!(TransactionKind::from("income"), TransactionKind::Income);
        assert_eq!(TransactionKind::from("expense"), TransactionKind::Expense);
        assert_eq!(
            TransactionKind::from("Expense"),
            TransactionKind::Other("Expense".into())
        );
        assert_eq!(String::from(TransactionKind::Other("refund".into())), "refund");
    }

    #[test]
    fn test_month_key() {
        let txn = Transaction::new(
            date(2024, 1, 5),
            "groceries",
            "Food",
            "expense",
            Money::from_dollars(40),
        );
        assert_eq!(txn.month_key().to_string(), "2024-01");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_unknown_kind_is_neither() {
        let txn = Transaction::new(date(2024, 1, 5), "", "Misc", "transfer", Money::zero());
        assert!(!txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_serde_uses_type_column() {
        let txn = Transaction::new(
            date(2024, 1, 15),
            "salary",
            "Pay",
            "income",
            Money::from_dollars(1000),
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["amount"], "1000.00");
    }
}
