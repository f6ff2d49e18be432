//! Finance Ledger - personal income/expense tracking
//!
//! This library provides the core of a single-user personal finance ledger:
//! transactions tagged income or expense, a monthly budget, derived totals
//! and charts data, and a durable record that can be exported and imported.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, the ledger root)
//! - `reports`: Pure aggregate derivations over transaction snapshots
//! - `services`: Ledger service and display filters
//! - `storage`: Key-value stores and ledger persistence
//! - `export`: JSON, CSV and YAML export
//! - `cli` / `display`: command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust
//! use finance_ledger::models::{Money, TransactionDraft, TransactionType};
//! use finance_ledger::services::LedgerService;
//! use finance_ledger::storage::{LedgerPersistence, MemoryStore};
//!
//! let mut ledger = LedgerService::open(LedgerPersistence::new(MemoryStore::new()));
//! ledger
//!     .add(TransactionDraft::new("Salary", "3000", TransactionType::Income))
//!     .unwrap();
//! assert_eq!(ledger.summary().totals.balance, Money::from_units(3000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
