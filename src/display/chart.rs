//! Text bar charts for terminal output

use crate::models::Category;
use crate::reports::{CategoryTotal, MonthTotal};

/// Width of a full-length bar in characters
pub const BAR_WIDTH: usize = 30;

/// Shown in place of a chart with nothing to draw
pub const EMPTY_CHART: &str = "No expense data yet.\n";

/// Create a bar of `width` cells, filled in proportion to `ratio` (0.0 to 1.0)
pub fn format_bar(ratio: f64, width: usize) -> String {
    if ratio.is_nan() || ratio <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((ratio * width as f64).round() as usize).clamp(1, width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Category totals as a horizontal bar chart
///
/// Only categories with spending are drawn, scaled to the largest total.
pub fn format_category_chart(totals: &[CategoryTotal], symbol: &str) -> String {
    let shown: Vec<&CategoryTotal> = totals.iter().filter(|t| t.total.is_positive()).collect();
    if shown.is_empty() {
        return EMPTY_CHART.to_string();
    }

    let max = shown.iter().map(|t| t.total).max().unwrap_or_default();
    let name_width = shown.iter().map(|t| t.category.len()).max().unwrap_or(8);

    let mut output = String::new();
    for total in shown {
        let marker = Category::from_name(&total.category)
            .map(|c| c.color())
            .unwrap_or("");
        output.push_str(&format!(
            "{:<name_width$}  {}  {:>12}  {}\n",
            total.category,
            format_bar(total.total.ratio_of(max), BAR_WIDTH),
            total.total.format_with_symbol(symbol),
            marker,
            name_width = name_width,
        ));
    }

    output
}

/// Monthly totals as a bar chart, one row per month
///
/// Every month is listed; empty months get a blank bar and no amount.
/// With no spending in any month only the empty-chart message is shown.
pub fn format_monthly_chart(months: &[MonthTotal], symbol: &str) -> String {
    if months.iter().all(|m| m.total.is_zero()) {
        return EMPTY_CHART.to_string();
    }

    let max = months.iter().map(|m| m.total).max().unwrap_or_default();

    let mut output = String::new();
    for month in months {
        let amount = if month.total.is_zero() {
            String::new()
        } else {
            month.total.format_with_symbol(symbol)
        };
        let line = format!(
            "{:<6}  {}  {:>12}",
            month.label,
            format_bar(month.total.ratio_of(max), BAR_WIDTH),
            amount
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn category(name: &str, cents: i64) -> CategoryTotal {
        CategoryTotal {
            category: name.to_string(),
            total: Money::from_cents(cents),
        }
    }

    fn month(label: &str, cents: i64) -> MonthTotal {
        MonthTotal {
            year: 2024,
            month: 1,
            label: label.to_string(),
            total: Money::from_cents(cents),
        }
    }

    fn filled(line: &str) -> usize {
        line.chars().filter(|c| *c == '█').count()
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(filled(&format_bar(0.5, 10)), 5);
        assert_eq!(filled(&format_bar(1.0, 10)), 10);
        assert_eq!(format_bar(0.0, 4), "    ");
        // tiny but non-zero still shows
        assert_eq!(filled(&format_bar(0.001, 10)), 1);
    }

    #[test]
    fn test_category_chart_skips_zero_totals() {
        let chart = format_category_chart(
            &[
                category("Food", 5000),
                category("Rent", 10000),
                category("Utilities", 0),
            ],
            "$",
        );

        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Food"));
        assert!(lines[0].contains("$50.00"));
        assert!(lines[0].contains("#4cc9f0"));
        assert_eq!(filled(lines[0]), BAR_WIDTH / 2);
        assert_eq!(filled(lines[1]), BAR_WIDTH);
        assert!(!chart.contains("Utilities"));
    }

    #[test]
    fn test_category_chart_empty() {
        let chart = format_category_chart(&[category("Food", 0)], "$");
        assert_eq!(chart, EMPTY_CHART);
    }

    #[test]
    fn test_category_chart_unregistered_name() {
        let chart = format_category_chart(&[category("Travel", 700)], "€");
        assert!(chart.starts_with("Travel"));
        assert!(chart.contains("€7.00"));
    }

    #[test]
    fn test_monthly_chart_keeps_empty_months() {
        let chart = format_monthly_chart(&[month("Jan 24", 0), month("Feb 24", 2500)], "$");
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Jan 24");
        assert!(lines[1].ends_with("$25.00"));
        assert_eq!(filled(lines[1]), BAR_WIDTH);
    }

    #[test]
    fn test_monthly_chart_without_spending() {
        let chart = format_monthly_chart(&[month("Jan 24", 0), month("Feb 24", 0)], "$");
        assert_eq!(chart, EMPTY_CHART);
        assert_eq!(format_monthly_chart(&[], "$"), EMPTY_CHART);
    }
}
