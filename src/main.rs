use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_logging;
use expense_tracker::services::ExpenseStore;
use expense_tracker::storage::open_file_repository;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track personal expenses from the terminal",
    long_about = "Record expenses under a fixed set of categories and see where the \
                  money goes: totals, a daily average, per-category and per-month \
                  charts, and the most recent entries."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let repository = open_file_repository(&paths)?;
            let mut store = ExpenseStore::initialize(repository);
            let today = Local::now().date_naive();
            handle_expense_command(&mut store, &settings, today, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent count:    {}", settings.recent_count);
            println!("  Trailing months: {}", settings.trailing_months);
        }
        None => {
            println!("Expense Tracker - personal expense tracking");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense sample' to load demonstration data.");
        }
    }

    Ok(())
}
