//! Budget CLI commands
//!
//! Implements listing and editing the per-category monthly limits.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_list;
use crate::error::TrackerResult;
use crate::models::Money;
use crate::services::{BudgetCommand, BudgetService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show current budgets
    List,

    /// Add a new budget category
    Add {
        /// Category name
        category: String,
        /// Monthly limit (e.g., "100" or "250.00")
        limit: Money,
    },

    /// Change the monthly limit of a category
    Update {
        /// Category name
        category: String,
        /// New monthly limit
        limit: Money,
    },

    /// Remove a budget category
    Remove {
        /// Category name
        category: String,
    },

    /// Apply several edits at once, saving once at the end
    Apply {
        /// Edits like add:Food=100, update:Food=120, remove:Food
        #[arg(required = true)]
        commands: Vec<BudgetCommand>,
    },
}

/// Handle a budget command
///
/// Rejected edits (unknown category, duplicate category) are reported and do
/// not fail the command.
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);

    let commands = match cmd {
        BudgetCommands::List => {
            let book = service.list()?;
            println!("--- Current Budgets ---");
            println!("{}", format_budget_list(&book, &settings.currency_symbol));
            return Ok(());
        }
        BudgetCommands::Add { category, limit } => vec![BudgetCommand::Add { category, limit }],
        BudgetCommands::Update { category, limit } => {
            vec![BudgetCommand::Update { category, limit }]
        }
        BudgetCommands::Remove { category } => vec![BudgetCommand::Remove { category }],
        BudgetCommands::Apply { commands } => commands,
    };

    let outcome = service.apply(&commands)?;
    for result in &outcome.results {
        match result {
            Ok(change) => println!("{}", change),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    if commands.len() > 1 {
        println!(
            "{} applied, {} rejected{}",
            outcome.applied(),
            outcome.failed(),
            if outcome.saved { "; budgets saved" } else { "" }
        );
    }

    Ok(())
}
