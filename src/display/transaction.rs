//! Transaction display formatting
//!
//! Register rows and detail views for terminal output.

use crate::models::{is_known_category, Transaction, TransactionType};

use super::report::truncate;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let sign = match txn.transaction_type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    format!(
        "{:12} {:10} {:24} {:14} {:>14}",
        txn.id,
        txn.date.format(date_format),
        truncate(&txn.title, 24),
        truncate(&txn.category, 14),
        format!("{}{}", sign, txn.amount.format_with_symbol(symbol))
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:14} {:>14}\n",
        "ID", "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("  ID:       {}\n", txn.id));
    output.push_str(&format!("  Title:    {}\n", txn.title));
    output.push_str(&format!("  Type:     {}\n", txn.transaction_type));
    if is_known_category(txn.transaction_type, &txn.category) {
        output.push_str(&format!("  Category: {}\n", txn.category));
    } else {
        output.push_str(&format!(
            "  Category: {} (not a standard {} category)\n",
            txn.category, txn.transaction_type
        ));
    }
    output.push_str(&format!(
        "  Amount:   {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Date:     {}\n", txn.date.format(date_format)));

    output
}
