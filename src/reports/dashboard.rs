//! Dashboard Summary
//!
//! Gathers every aggregate the dashboard shows into one snapshot.

use chrono::NaiveDate;

use super::aggregates::{
    daily_average_current_month, recent, total_all, total_current_month, totals_by_category,
    totals_by_trailing_months, CategoryTotal, MonthTotal,
};
use crate::config::Settings;
use crate::display::{
    format_category_chart, format_date, format_expense_table, format_monthly_chart,
};
use crate::models::{Expense, Money};

/// Dashboard snapshot computed from a full expense list
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// Date the summary was computed for
    pub today: NaiveDate,
    /// Sum of every expense
    pub total: Money,
    /// Sum of this month's expenses
    pub current_month: Money,
    /// This month's total spread over the days elapsed
    pub daily_average: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Totals per category, registry order first
    pub by_category: Vec<CategoryTotal>,
    /// Trailing monthly totals, oldest first
    pub by_month: Vec<MonthTotal>,
    /// Newest expenses
    pub recent: Vec<Expense>,
}

impl DashboardSummary {
    /// Compute the summary
    pub fn generate(records: &[Expense], today: NaiveDate, settings: &Settings) -> Self {
        Self {
            today,
            total: total_all(records),
            current_month: total_current_month(records, today),
            daily_average: daily_average_current_month(records, today),
            expense_count: records.len(),
            by_category: totals_by_category(records),
            by_month: totals_by_trailing_months(records, today, settings.trailing_months),
            recent: recent(records, settings.recent_count)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Summary ({})\n",
            format_date(self.today, settings)
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "Total Expenses:",
            self.total.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "This Month:",
            self.current_month.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "Daily Average:",
            self.daily_average.format_with_symbol(symbol)
        ));
        output.push_str(&format!("{:<22} {:>14}\n", "Expenses:", self.expense_count));

        output.push_str("\nBy Category\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format_category_chart(&self.by_category, symbol));

        output.push_str("\nBy Month\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format_monthly_chart(&self.by_month, symbol));

        output.push_str("\nRecent Expenses\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        let recent: Vec<&Expense> = self.recent.iter().collect();
        output.push_str(&format_expense_table(&recent, settings));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<Expense> {
        [
            (1, 4575, "Food", date(2024, 2, 1), "Groceries"),
            (2, 12050, "Transportation", date(2024, 2, 10), "Gas"),
            (3, 85000, "Rent", date(2024, 1, 31), "Rent"),
            (4, 1500, "Food", date(2024, 2, 14), "Coffee"),
        ]
        .into_iter()
        .map(|(id, cents, category, on, description)| Expense {
            id: ExpenseId::new(id),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            date: on,
            description: description.to_string(),
        })
        .collect()
    }

    #[test]
    fn test_generate() {
        let settings = Settings {
            recent_count: 2,
            trailing_months: 3,
            ..Settings::default()
        };
        let summary = DashboardSummary::generate(&records(), date(2024, 2, 15), &settings);

        assert_eq!(summary.total, Money::from_cents(103125));
        assert_eq!(summary.current_month, Money::from_cents(18125));
        assert_eq!(summary.expense_count, 4);
        assert_eq!(summary.by_category.len(), 6);
        assert_eq!(summary.by_month.len(), 3);
        assert_eq!(summary.recent.len(), 2);
        assert_eq!(summary.recent[0].description, "Coffee");
    }

    #[test]
    fn test_empty_summary() {
        let settings = Settings::default();
        let summary = DashboardSummary::generate(&[], date(2024, 2, 15), &settings);

        assert!(summary.total.is_zero());
        assert!(summary.daily_average.is_zero());
        assert!(summary.recent.is_empty());
        assert_eq!(summary.by_month.len(), 6);

        let output = summary.format_terminal(&settings);
        assert!(output.contains("Total Expenses:"));
        assert!(output.contains("No expenses found."));
        assert_eq!(output.matches("No expense data yet.").count(), 2);
    }

    #[test]
    fn test_format_terminal() {
        let settings = Settings::default();
        let summary = DashboardSummary::generate(&records(), date(2024, 2, 15), &settings);
        let output = summary.format_terminal(&settings);

        assert!(output.contains("Expense Summary (Feb 15, 2024)"));
        assert!(output.contains("$1031.25"));
        assert!(output.contains("$181.25"));
        assert!(output.contains("Feb 24"));
        assert!(output.contains("Transportation"));
        assert!(!output.contains("Utilities"));
    }
}
