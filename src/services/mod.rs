//! Service layer for the finance ledger
//!
//! The service layer owns the live ledger, validates input, keeps the
//! derived summary current and writes every change through to storage.

pub mod filter;
pub mod ledger;

pub use filter::TransactionFilter;
pub use ledger::{LedgerService, PersistWarning};
