//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, the category registry, and
//! the dashboard charts for terminal display.

pub mod chart;
pub mod expense;

pub use chart::{format_bar, format_category_chart, format_monthly_chart};
pub use expense::{
    format_category_list, format_date, format_expense_details, format_expense_table,
};
