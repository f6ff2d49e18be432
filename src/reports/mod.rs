//! Reports module for the finance ledger
//!
//! Aggregate derivations (totals, monthly series, category breakdown and
//! budget usage) computed from read-only transaction snapshots.

pub mod aggregate;

pub use aggregate::{
    budget_usage, category_breakdown, monthly_series, totals, BudgetUsage, MonthKey,
    MonthlyPoint, Summary, Totals,
};
