//! Core data models for the finance ledger
//!
//! This module contains the data structures of the ledger domain:
//! transactions, their drafts, the category vocabulary and the ledger root.

pub mod category;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use category::{categories_for, default_category, is_known_category};
pub use ids::TransactionId;
pub use ledger::{Ledger, LedgerValidationError, DEFAULT_MONTHLY_BUDGET};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionDraft, TransactionType, TransactionValidationError};
