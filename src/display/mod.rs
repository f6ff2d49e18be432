//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod report;
pub mod transaction;

pub use report::{
    format_budget_usage, format_category_report, format_monthly_report, format_totals,
};
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
