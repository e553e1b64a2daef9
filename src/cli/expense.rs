//! Expense CLI commands
//!
//! Implements the CLI commands for recording, editing, and summarizing
//! expenses.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_category_list, format_date, format_expense_details, format_expense_table,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{list_categories, Category, ExpenseId, ExpenseInput, Money};
use crate::reports::{all_sorted_by_date_desc, recent, DashboardSummary};
use crate::services::ExpenseStore;
use crate::storage::BlobStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "45.75" or "$45.75")
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Money,
        /// Category name (case-insensitive)
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Description, defaults to "Expense on <date>"
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Edit an existing expense
    Edit {
        /// Expense ID
        id: ExpenseId,
        /// New amount
        #[arg(short, long, value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Option<Money>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// New description (empty resets to the default)
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Show expense details
    Show {
        /// Expense ID
        id: ExpenseId,
    },

    /// List expenses, newest first
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the most recent expenses
    Recent {
        /// Number of expenses (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show totals, charts, and recent expenses
    #[command(alias = "dashboard")]
    Summary,

    /// List the built-in categories
    Categories,

    /// Load demonstration expenses into an empty store
    Sample,
}

/// Handle an expense command
pub fn handle_expense_command<B: BlobStore>(
    store: &mut ExpenseStore<B>,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let input = ExpenseInput::new(
                amount,
                canonical_category(&category),
                date.unwrap_or(today),
                description.unwrap_or_default(),
            );
            let expense = store.create(input)?;

            println!("Added expense: {}", expense.description);
            println!(
                "  Amount:   {}",
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Category: {}", expense.category);
            println!("  Date:     {}", format_date(expense.date, settings));
            println!("  ID:       {}", expense.id);
            warn_if_unsaved(store);
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let existing = store
                .find(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            if amount.is_none() && category.is_none() && date.is_none() && description.is_none() {
                println!("No changes specified. Use --amount, --category, --date, or --description.");
                return Ok(());
            }

            let mut input = existing.to_input();
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(category) = category {
                input.category = canonical_category(&category);
            }
            if let Some(date) = date {
                input.date = Some(date);
            }
            if let Some(description) = description {
                input.description = description;
            }

            let updated = store.update(id, input)?;
            println!("Updated expense: {}", updated.id);
            print!("{}", format_expense_details(&updated, settings));
            warn_if_unsaved(store);
        }

        ExpenseCommands::Delete { id, force } => {
            let expense = store
                .find(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            if !force && !confirm(&format!("Delete \"{}\"?", expense))? {
                println!("Cancelled.");
                return Ok(());
            }

            let removed = store.delete(id)?;
            println!("Deleted expense: {}", removed);
            warn_if_unsaved(store);
        }

        ExpenseCommands::Show { id } => {
            let expense = store
                .find(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(expense, settings));
        }

        ExpenseCommands::List { category, limit } => {
            let mut expenses = all_sorted_by_date_desc(store.list_all());

            if let Some(name) = category {
                let category = Category::find(&name)
                    .ok_or_else(|| ExpenseError::category_not_found(&name))?;
                expenses.retain(|e| e.category == category.name());
            }
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            print!("{}", format_expense_table(&expenses, settings));
            if !expenses.is_empty() {
                println!("{} of {} expenses", expenses.len(), store.len());
            }
        }

        ExpenseCommands::Recent { count } => {
            let count = count.unwrap_or(settings.recent_count);
            let latest = recent(store.list_all(), count);
            print!("{}", format_expense_table(&latest, settings));
        }

        ExpenseCommands::Summary => {
            let summary = DashboardSummary::generate(store.list_all(), today, settings);
            print!("{}", summary.format_terminal(settings));
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_list(&list_categories()));
        }

        ExpenseCommands::Sample => {
            let added = store.load_sample_data(today)?;
            if added == 0 {
                println!("Sample data is only loaded into an empty expense list.");
            } else {
                println!("Loaded {} sample expenses.", added);
                warn_if_unsaved(store);
            }
        }
    }

    Ok(())
}

/// Parse an amount argument such as "45.75" or "$1,200"
pub fn parse_amount(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// Parse a date argument in YYYY-MM-DD form
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Map a user-typed category onto its registry spelling
///
/// Unknown names pass through unchanged so validation can report them.
fn canonical_category(name: &str) -> String {
    Category::find(name)
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| name.trim().to_string())
}

fn warn_if_unsaved<B: BlobStore>(store: &ExpenseStore<B>) {
    if let Some(err) = store.last_persist_error() {
        eprintln!("Warning: changes were not saved: {}", err);
    }
}

fn confirm(prompt: &str) -> ExpenseResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
