//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{CategoryInfo, Expense};

/// One row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: format_date(expense.date, settings),
            category: expense.category.clone(),
            description: truncate(&expense.description, 40),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// Format a date with the configured format, or as YYYY-MM-DD if that format is invalid
pub fn format_date(date: NaiveDate, settings: &Settings) -> String {
    if settings.date_format_is_valid() {
        date.format(&settings.date_format).to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[&Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, settings));
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n", table)
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!(
        "  Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("  Category:    {}\n", expense.category));
    if expense.registry_category().is_none() {
        output.push_str("               (not a built-in category)\n");
    }
    output.push_str(&format!(
        "  Date:        {}\n",
        format_date(expense.date, settings)
    ));
    output.push_str(&format!("  Description: {}\n", expense.description));

    output
}

/// Format the category registry
pub fn format_category_list(categories: &[CategoryInfo]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<16} {:<9} {}\n", "Category", "Color", "Background"));
    output.push_str(&format!("{:-<16} {:-<9} {:-<24}\n", "", "", ""));

    for info in categories {
        output.push_str(&format!(
            "{:<16} {:<9} {}\n",
            info.name, info.color, info.background_color
        ));
    }

    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{list_categories, ExpenseId, Money};

    fn expense(category: &str, description: &str) -> Expense {
        Expense {
            id: ExpenseId::new(1709251200000),
            amount: Money::from_cents(4575),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_expense_table(&[], &Settings::default()),
            "No expenses found.\n"
        );
    }

    #[test]
    fn test_table_rows() {
        let a = expense("Food", "Groceries");
        let b = expense("Rent", "Apartment rent");
        let output = format_expense_table(&[&a, &b], &Settings::default());

        assert!(output.contains("ID"));
        assert!(output.contains("Description"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("Apartment rent"));
        assert!(output.contains("Mar 1, 2024"));
        assert!(output.contains("$45.75"));
        assert!(output.contains("1709251200000"));
    }

    #[test]
    fn test_details() {
        let settings = Settings {
            currency_symbol: "€".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            ..Settings::default()
        };
        let output = format_expense_details(&expense("Food", "Lunch"), &settings);

        assert!(output.contains("Amount:      €45.75"));
        assert!(output.contains("Date:        2024-03-01"));
        assert!(output.contains("Description: Lunch"));
        assert!(!output.contains("not a built-in"));
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let settings = Settings {
            date_format: "%Q".to_string(),
            ..Settings::default()
        };
        let e = expense("Food", "Lunch");

        let output = format_expense_details(&e, &settings);
        assert!(output.contains("Date:        2024-03-01"));
        assert!(format_expense_table(&[&e], &settings).contains("2024-03-01"));
    }

    #[test]
    fn test_details_flag_unregistered_category() {
        let output = format_expense_details(&expense("Travel", "Train"), &Settings::default());
        assert!(output.contains("Category:    Travel"));
        assert!(output.contains("not a built-in"));
    }

    #[test]
    fn test_category_list() {
        let output = format_category_list(&list_categories());
        assert_eq!(output.lines().count(), 8);
        assert!(output.contains("Transportation"));
        assert!(output.contains("#f72585"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café crème", 6), "Caf...");
    }
}
