use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finance_tracker::cli::{
    handle_budget_command, handle_chart_command, handle_monthly_report, handle_summary,
    handle_transaction_command, BudgetCommands, ChartCommands, TransactionCommands,
};
use finance_tracker::config::{paths::DATA_DIR_ENV, Settings, TrackerPaths};
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker",
    long_about = "Track income and expenses in plain CSV files, set monthly \
                  budgets per category, and get monthly summary reports."
)]
struct Cli {
    /// Directory holding transactions.csv, budgets.csv and settings.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and list transactions
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show total income, expenses and balance, plus budget warnings
    Summary,

    /// Show the monthly summary report
    Report {
        /// Save the report to the configured report file
        #[arg(short, long)]
        export: bool,

        /// Save the report to this path instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense charts
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new(),
    };
    let settings = Settings::load_or_default(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => handle_summary(&storage, &settings)?,
        Some(Commands::Report { export, output }) => {
            handle_monthly_report(&storage, &settings, export, output)?;
        }
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Chart(cmd)) => handle_chart_command(&storage, &settings, cmd)?,
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Top categories:   {}", settings.top_categories);
            println!(
                "  Report file:      {}",
                paths.report_file(&settings.report_file).display()
            );
            println!("  Colored warnings: {}", settings.colored_warnings);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}
