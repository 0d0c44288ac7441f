//! Month key used to bucket transactions
//!
//! A month key is the `YYYY-MM` prefix of a transaction date. Keys order
//! chronologically, which for four-digit years is the same as ordering their
//! string form.

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// A calendar month, e.g. "2024-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, TrackerError> {
        if !(1..=12).contains(&month) {
            return Err(TrackerError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, TrackerError> {
        let s = s.trim();
        let invalid =
            || TrackerError::Parse(format!("Invalid month '{}'. Use YYYY-MM (e.g., 2024-01)", s));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MonthKey::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_takes_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let key = MonthKey::from_date(date);
        assert_eq!(key.to_string(), "2024-01");
        assert!(key.contains(date));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }

    #[test]
    fn test_parse() {
        let key = MonthKey::parse("2024-03").unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 3);

        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("2024-3").is_err());
        assert!(MonthKey::parse("March").is_err());
        assert!(MonthKey::parse("2024-03-01").is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::parse("2024-03").unwrap(),
            MonthKey::parse("2023-12").unwrap(),
            MonthKey::parse("2024-01").unwrap(),
        ];
        keys.sort();
        let rendered: Vec<_> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, vec!["2023-12", "2024-01", "2024-03"]);
    }
}
