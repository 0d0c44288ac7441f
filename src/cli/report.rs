//! CLI commands for reports
//!
//! Summary with budget warnings, the monthly report, and expense charts.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_chart, format_month_breakdown, format_warning};
use crate::error::TrackerResult;
use crate::export::export_report;
use crate::models::MonthKey;
use crate::reports::{check_budget_warnings, expenses_by_category, MonthBreakdown, MonthlyReport, Summary};
use crate::storage::Storage;

/// Chart subcommands
#[derive(Subcommand, Debug)]
pub enum ChartCommands {
    /// Bar chart of all-time expenses per category
    Expenses,

    /// Category breakdown of one month's expenses
    Month {
        /// Month (YYYY-MM), defaults to the current month
        month: Option<MonthKey>,
    },
}

/// Print totals followed by any budget overage warnings
pub fn handle_summary(storage: &Storage, settings: &Settings) -> TrackerResult<()> {
    let transactions = storage.transactions.load()?;
    let budgets = storage.budgets.load()?;

    let summary = Summary::from_transactions(&transactions);
    println!("{}", summary.format_with_symbol(&settings.currency_symbol));

    let warnings = check_budget_warnings(&transactions, &budgets);
    if !warnings.is_empty() {
        println!();
    }
    for warning in &warnings {
        println!(
            "{}",
            format_warning(warning, &settings.currency_symbol, settings.colored_warnings)
        );
    }

    Ok(())
}

/// Print the monthly report, optionally saving it as well
pub fn handle_monthly_report(
    storage: &Storage,
    settings: &Settings,
    export: bool,
    output: Option<PathBuf>,
) -> TrackerResult<()> {
    let transactions = storage.transactions.load()?;
    let report = MonthlyReport::generate_with_top(&transactions, settings.top_categories);
    let text = report.format_with_symbol(&settings.currency_symbol);

    print!("{}", text);

    if export || output.is_some() {
        let path = output.unwrap_or_else(|| storage.paths().report_file(&settings.report_file));
        export_report(&text, &path)?;
        println!("Monthly report saved as '{}'", path.display());
    }

    Ok(())
}

/// Handle chart commands
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ChartCommands,
) -> TrackerResult<()> {
    let transactions = storage.transactions.load()?;
    let symbol = &settings.currency_symbol;

    match cmd {
        ChartCommands::Expenses => {
            let totals = expenses_by_category(&transactions);
            if totals.is_empty() {
                println!("No expenses to plot.");
            } else {
                print!("{}", format_expense_chart(&totals, symbol));
            }
        }
        ChartCommands::Month { month } => {
            let month = month.unwrap_or_else(MonthKey::current);
            match MonthBreakdown::generate(&transactions, month) {
                Some(breakdown) => print!("{}", format_month_breakdown(&breakdown, symbol)),
                None => println!("No expense data found for {}.", month),
            }
        }
    }

    Ok(())
}
