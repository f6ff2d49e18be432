//! Report formatting utilities for terminal output
//!
//! Renders the summary views: totals, budget usage, monthly series and the
//! category breakdown.

use crate::models::Money;
use crate::reports::{BudgetUsage, MonthlyPoint, Summary};

const REPORT_WIDTH: usize = 50;
const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
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

/// Headline figures: balance, income and expenses
pub fn format_totals(summary: &Summary, symbol: &str) -> String {
    let totals = &summary.totals;
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16}{:>16}\n",
        "Balance:",
        totals.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<16}{:>16}  ({} transactions)\n",
        "Total income:",
        totals.income.format_with_symbol(symbol),
        summary.income_count
    ));
    output.push_str(&format!(
        "{:<16}{:>16}  ({} transactions)\n",
        "Total expenses:",
        totals.expenses.format_with_symbol(symbol),
        summary.expense_count
    ));

    output
}

/// Budget, spent, remaining and a usage bar
pub fn format_budget_usage(usage: &BudgetUsage, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16}{:>16}\n",
        "Monthly budget:",
        usage.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<16}{:>16}\n",
        "Spent:",
        usage.spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<16}{:>16}\n",
        "Remaining:",
        usage.remaining.format_with_symbol(symbol)
    ));

    if let Some(pct) = usage.percent_used() {
        output.push_str(&format!(
            "{} {}\n",
            format_bar(pct.min(100.0), 100.0, BAR_WIDTH),
            format_percentage(pct)
        ));
    }
    if usage.is_over_budget() {
        output.push_str("Over budget!\n");
    }

    output
}

/// Income and expenses per month, oldest first
pub fn format_monthly_report(series: &[MonthlyPoint], symbol: &str) -> String {
    if series.is_empty() {
        return "No transactions to report.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:>14} {:>14} {:>14}\n",
        "Month", "Income", "Expenses", "Net"
    ));
    output.push_str(&separator(REPORT_WIDTH + 5));
    output.push('\n');

    for point in series {
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14}\n",
            point.month.label(),
            point.income.format_with_symbol(symbol),
            point.expenses.format_with_symbol(symbol),
            (point.income - point.expenses).format_with_symbol(symbol)
        ));
    }

    output
}

/// Expense totals per category with share bars, largest first
pub fn format_category_report<'a, I>(categories: I, symbol: &str) -> String
where
    I: IntoIterator<Item = (&'a String, &'a Money)>,
{
    let mut rows: Vec<(&String, &Money)> = categories.into_iter().collect();
    if rows.is_empty() {
        return "No expenses to report.\n".to_string();
    }
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let total: Money = rows.iter().map(|(_, amount)| **amount).sum();
    let max = rows[0].1.to_units_f64();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:>12} {:>7}\n",
        "Category", "Amount", "Share"
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for (category, amount) in rows {
        let share = if total.is_positive() {
            amount.cents() as f64 / total.cents() as f64 * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "{:<16} {:>12} {:>7} {}\n",
            truncate(category, 16),
            amount.format_with_symbol(symbol),
            format_percentage(share),
            format_bar(amount.to_units_f64(), max, BAR_WIDTH / 2)
        ));
    }

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<16} {:>12}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));

    output
}
