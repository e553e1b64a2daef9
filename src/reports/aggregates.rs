//! Aggregate calculations over expense snapshots
//!
//! Every function here is a pure read over a slice of expenses and is
//! recomputed from a full scan on each call.

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Expense, Money};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Total spent in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub year: i32,
    /// Month number, 1-12
    pub month: u32,
    /// Short label such as "Feb 24"
    pub label: String,
    pub total: Money,
}

/// Sum of every expense
pub fn total_all(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// Sum of the expenses dated in the same month and year as `today`
pub fn total_current_month(records: &[Expense], today: NaiveDate) -> Money {
    records
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
        .map(|e| e.amount)
        .sum()
}

/// This month's total spread over the days elapsed so far
pub fn daily_average_current_month(records: &[Expense], today: NaiveDate) -> Money {
    total_current_month(records, today).split_even(today.day())
}

/// Totals per category
///
/// Every registry category is present (in registry order, zero if unused).
/// Categories outside the registry follow in the order first seen.
pub fn totals_by_category(records: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Category::all()
        .iter()
        .map(|c| CategoryTotal {
            category: c.name().to_string(),
            total: Money::zero(),
        })
        .collect();

    for expense in records {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }

    totals
}

/// Look up one category's total in the output of [`totals_by_category`]
pub fn category_total(totals: &[CategoryTotal], category: &str) -> Option<Money> {
    totals
        .iter()
        .find(|t| t.category == category)
        .map(|t| t.total)
}

/// Totals for `count` consecutive months ending with `today`'s month, oldest first
///
/// Expenses outside the window are ignored; empty months are still listed.
pub fn totals_by_trailing_months(
    records: &[Expense],
    today: NaiveDate,
    count: u32,
) -> Vec<MonthTotal> {
    let current = month_index(today);
    let first = current - i64::from(count) + 1;

    let mut buckets: Vec<MonthTotal> = (first..=current)
        .map(|index| {
            let year = index.div_euclid(12) as i32;
            let month0 = index.rem_euclid(12) as usize;
            MonthTotal {
                year,
                month: month0 as u32 + 1,
                label: format!("{} {:02}", MONTH_NAMES[month0], year.rem_euclid(100)),
                total: Money::zero(),
            }
        })
        .collect();

    for expense in records {
        let index = month_index(expense.date);
        if (first..=current).contains(&index) {
            buckets[(index - first) as usize].total += expense.amount;
        }
    }

    buckets
}

/// The `n` newest expenses by date
pub fn recent(records: &[Expense], n: usize) -> Vec<&Expense> {
    let mut sorted = all_sorted_by_date_desc(records);
    sorted.truncate(n);
    sorted
}

/// Every expense, newest date first
///
/// The sort is stable, so expenses sharing a date keep insertion order.
pub fn all_sorted_by_date_desc(records: &[Expense]) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}
