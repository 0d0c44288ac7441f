//! Budget service
//!
//! Edits the category -> limit mapping as a batch of add/update/remove
//! commands, then replaces the persisted mapping in one write. Each command
//! succeeds or fails on its own; a failed command leaves the book untouched
//! and the rest of the batch still runs.

use std::fmt;
use std::str::FromStr;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetBook, Money};
use crate::storage::Storage;

/// One edit to the budget mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetCommand {
    /// Insert a new category; fails if it already exists
    Add { category: String, limit: Money },
    /// Change the limit of an existing category
    Update { category: String, limit: Money },
    /// Delete an existing category
    Remove { category: String },
}

impl BudgetCommand {
    pub fn category(&self) -> &str {
        match self {
            Self::Add { category, .. } | Self::Update { category, .. } | Self::Remove { category } => {
                category
            }
        }
    }
}

impl FromStr for BudgetCommand {
    type Err = TrackerError;

    /// Parse `add:Food=100`, `update:Food=120` or `remove:Food`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            TrackerError::Validation(format!(
                "Invalid budget command '{}'. Use add:CATEGORY=LIMIT, update:CATEGORY=LIMIT or remove:CATEGORY",
                s
            ))
        };

        let (action, rest) = s.split_once(':').ok_or_else(invalid)?;
        let parse_pair = |rest: &str| -> TrackerResult<(String, Money)> {
            let (category, limit) = rest.rsplit_once('=').ok_or_else(invalid)?;
            let limit = Money::parse(limit).map_err(|e| TrackerError::Validation(e.to_string()))?;
            Ok((category.to_string(), limit))
        };

        match action.trim().to_lowercase().as_str() {
            "add" => {
                let (category, limit) = parse_pair(rest)?;
                Ok(Self::Add { category, limit })
            }
            "update" => {
                let (category, limit) = parse_pair(rest)?;
                Ok(Self::Update { category, limit })
            }
            "remove" => Ok(Self::Remove {
                category: rest.to_string(),
            }),
            _ => Err(invalid()),
        }
    }
}

/// What a successful command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetChange {
    Added {
        category: String,
        limit: Money,
    },
    Updated {
        category: String,
        previous: Money,
        limit: Money,
    },
    Removed {
        category: String,
        limit: Money,
    },
}

impl fmt::Display for BudgetChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { category, limit } => {
                write!(f, "Added {} with limit {}", category, limit.format_with_symbol("$"))
            }
            Self::Updated {
                category, limit, ..
            } => write!(f, "Updated {} to {}", category, limit.format_with_symbol("$")),
            Self::Removed { category, .. } => write!(f, "Removed category {}.", category),
        }
    }
}

fn normalize_category(raw: &str) -> TrackerResult<String> {
    let category = raw.trim();
    if category.is_empty() {
        return Err(TrackerError::Validation(
            "Budget category name cannot be empty".into(),
        ));
    }
    Ok(category.to_string())
}

fn validate_limit(limit: Money) -> TrackerResult<Money> {
    if limit.is_negative() {
        return Err(TrackerError::Validation(format!(
            "Monthly limit cannot be negative: {}",
            limit
        )));
    }
    Ok(limit)
}

/// Apply a single command to a book
pub fn apply_command(book: &mut BudgetBook, command: &BudgetCommand) -> TrackerResult<BudgetChange> {
    match command {
        BudgetCommand::Add { category, limit } => {
            let category = normalize_category(category)?;
            let limit = validate_limit(*limit)?;
            if book.contains(&category) {
                return Err(TrackerError::budget_exists(category));
            }
            book.set_limit(category.clone(), limit);
            Ok(BudgetChange::Added { category, limit })
        }
        BudgetCommand::Update { category, limit } => {
            let category = normalize_category(category)?;
            let limit = validate_limit(*limit)?;
            let previous = book
                .limit(&category)
                .ok_or_else(|| TrackerError::budget_not_found(&category))?;
            book.set_limit(category.clone(), limit);
            Ok(BudgetChange::Updated {
                category,
                previous,
                limit,
            })
        }
        BudgetCommand::Remove { category } => {
            let category = normalize_category(category)?;
            let limit = book
                .remove(&category)
                .ok_or_else(|| TrackerError::budget_not_found(&category))?;
            Ok(BudgetChange::Removed { category, limit })
        }
    }
}

/// Apply commands in order, collecting one outcome per command
pub fn apply_batch(
    book: &mut BudgetBook,
    commands: &[BudgetCommand],
) -> Vec<TrackerResult<BudgetChange>> {
    commands
        .iter()
        .map(|command| apply_command(book, command))
        .collect()
}

/// Result of running a batch against the stored budgets
#[derive(Debug)]
pub struct BatchOutcome {
    /// One entry per command, in order
    pub results: Vec<TrackerResult<BudgetChange>>,
    /// The mapping after the batch
    pub book: BudgetBook,
    /// Whether the mapping was written back
    pub saved: bool,
}

impl BatchOutcome {
    pub fn applied(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.applied()
    }
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current budget mapping
    pub fn list(&self) -> TrackerResult<BudgetBook> {
        self.storage.budgets.load()
    }

    /// Load, apply every command, and replace the stored mapping
    ///
    /// The file is only rewritten when at least one command succeeded.
    pub fn apply(&self, commands: &[BudgetCommand]) -> TrackerResult<BatchOutcome> {
        let mut book = self.storage.budgets.load()?;
        let results = apply_batch(&mut book, commands);

        for (command, result) in commands.iter().zip(&results) {
            match result {
                Ok(change) => tracing::info!(category = command.category(), "{}", change),
                Err(e) => tracing::warn!(category = command.category(), error = %e, "budget command rejected"),
            }
        }

        let saved = results.iter().any(|r| r.is_ok());
        if saved {
            self.storage.budgets.replace(&book)?;
        }

        Ok(BatchOutcome {
            results,
            book,
            saved,
        })
    }

    /// Apply a single command and persist it, failing if it was rejected
    pub fn apply_one(&self, command: BudgetCommand) -> TrackerResult<BudgetChange> {
        let mut outcome = self.apply(std::slice::from_ref(&command))?;
        match outcome.results.pop() {
            Some(result) => result,
            None => Err(TrackerError::Validation("No budget command given".into())),
        }
    }
}
