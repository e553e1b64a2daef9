//! Demonstration expenses
//!
//! A small spread of expenses over the last ten days, used to populate an
//! empty store so the dashboard has something to show.

use crate::models::Category;

pub(crate) struct SampleExpense {
    pub cents: i64,
    pub category: Category,
    pub days_ago: i64,
    pub description: &'static str,
}

pub(crate) const SAMPLE_EXPENSES: &[SampleExpense] = &[
    SampleExpense {
        cents: 4575,
        category: Category::Food,
        days_ago: 7,
        description: "Lunch at restaurant",
    },
    SampleExpense {
        cents: 12050,
        category: Category::Transportation,
        days_ago: 5,
        description: "Monthly metro card",
    },
    SampleExpense {
        cents: 85000,
        category: Category::Rent,
        days_ago: 10,
        description: "Apartment rent",
    },
    SampleExpense {
        cents: 6530,
        category: Category::Utilities,
        days_ago: 3,
        description: "Electricity bill",
    },
    SampleExpense {
        cents: 2999,
        category: Category::Entertainment,
        days_ago: 1,
        description: "Movie tickets",
    },
    SampleExpense {
        cents: 1500,
        category: Category::Food,
        days_ago: 0,
        description: "Coffee shop",
    },
];
