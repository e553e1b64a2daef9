//! Reports module for the expense tracker
//!
//! Aggregate calculations over the expense list and the dashboard summary
//! built from them.

pub mod aggregates;
pub mod dashboard;

pub use aggregates::{
    all_sorted_by_date_desc, category_total, daily_average_current_month, recent, total_all,
    total_current_month, totals_by_category, totals_by_trailing_months, CategoryTotal, MonthTotal,
};
pub use dashboard::DashboardSummary;
