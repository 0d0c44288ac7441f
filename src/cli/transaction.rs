//! Transaction CLI commands
//!
//! Implements recording and listing transactions.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::Money;
use crate::services::{NewTransaction, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Free text description
        description: String,
        /// Category name (case-sensitive)
        category: String,
        /// Transaction type: income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Amount (e.g., "40" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: Money,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List recorded transactions
    List {
        /// Only show the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            description,
            category,
            kind,
            amount,
            date,
        } => {
            let transaction = service.record(NewTransaction {
                description,
                category,
                kind,
                amount,
                date,
            })?;
            println!(
                "Recorded {} of {} in {} on {}",
                transaction.kind,
                transaction.amount.format_with_symbol(&settings.currency_symbol),
                transaction.category,
                transaction.date
            );
        }
        TransactionCommands::List { limit } => {
            let transactions = service.list()?;
            if transactions.is_empty() {
                println!("No transactions recorded.");
                return Ok(());
            }

            let skip = limit.map_or(0, |n| transactions.len().saturating_sub(n));
            println!(
                "{:<10}  {:<8}  {:<16}  {:>12}  Description",
                "Date", "Type", "Category", "Amount"
            );
            println!("{}", "-".repeat(64));
            for txn in transactions.iter().skip(skip) {
                println!(
                    "{:<10}  {:<8}  {:<16}  {:>12}  {}",
                    txn.date,
                    txn.kind,
                    crate::display::report::truncate(&txn.category, 16),
                    txn.amount.format_with_symbol(&settings.currency_symbol),
                    txn.description
                );
            }
        }
    }

    Ok(())
}
