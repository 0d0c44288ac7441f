//! Report formatting utilities for terminal output
//!
//! Text bar charts, percentages and warning highlighting.

use crate::models::Money;
use crate::reports::{BudgetWarning, CategoryTotals, MonthBreakdown};

const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Width of the bar column in text charts
pub const BAR_WIDTH: usize = 30;

/// Format a budget warning, optionally in red
pub fn format_warning(warning: &BudgetWarning, symbol: &str, colored: bool) -> String {
    let text = warning.format_with_symbol(symbol);
    if colored {
        format!("{}{}{}", RED, text, RESET)
    } else {
        text
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0).min(24)
}

/// Horizontal bar chart of all-time expenses per category
pub fn format_expense_chart(totals: &CategoryTotals, symbol: &str) -> String {
    let mut output = String::from("Expenses by Category\n");
    let max = totals
        .iter()
        .map(|e| e.amount)
        .max()
        .unwrap_or_else(Money::zero);
    let width = label_width(totals.iter().map(|e| e.category.as_str()));

    for entry in totals.iter() {
        output.push_str(&format!(
            "  {:<width$} {} {}\n",
            truncate(&entry.category, width),
            format_bar(entry.amount.as_f64(), max.as_f64(), BAR_WIDTH),
            entry.amount.format_with_symbol(symbol),
            width = width
        ));
    }

    output
}

/// Per-category share of one month's expenses
pub fn format_month_breakdown(breakdown: &MonthBreakdown, symbol: &str) -> String {
    let mut output = format!("Expenses by Category - {}\n", breakdown.month);
    let width = label_width(breakdown.slices.iter().map(|s| s.category.as_str()));

    for slice in &breakdown.slices {
        output.push_str(&format!(
            "  {:<width$} {} {:>7} {}\n",
            truncate(&slice.category, width),
            format_bar(slice.percentage, 100.0, BAR_WIDTH),
            format_percentage(slice.percentage),
            slice.amount.format_with_symbol(symbol),
            width = width
        ));
    }
    output.push_str(&format!(
        "  Total: {}\n",
        breakdown.total.format_with_symbol(symbol)
    ));

    output
}
