//! Ledger model
//!
//! The aggregate root: every transaction in display order (newest first)
//! plus the monthly budget. Serializes to the persisted record shape
//! `{ "transactions": [...], "monthlyBudget": number }`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::transaction::{Transaction, TransactionValidationError};

/// Budget used when none has been set
pub const DEFAULT_MONTHLY_BUDGET: Money = Money::from_units(5000);

fn default_monthly_budget() -> Money {
    DEFAULT_MONTHLY_BUDGET
}

/// All transactions plus the budget setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
        }
    }
}

impl Ledger {
    /// Create an empty ledger with the default budget
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.get(id).is_some()
    }

    /// Insert at the front (newest first)
    pub fn prepend(&mut self, txn: Transaction) {
        self.transactions.insert(0, txn);
    }

    /// Replace the entry with the same id, keeping its position.
    /// Returns false when no entry matches.
    pub fn replace(&mut self, txn: Transaction) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with `id`, returning it if it existed
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Set the budget; negative values clamp to zero
    pub fn set_budget(&mut self, budget: Money) {
        self.monthly_budget = budget.max_zero();
    }

    /// Check every ledger invariant
    pub fn validate(&self) -> Result<(), LedgerValidationError> {
        if self.monthly_budget.is_negative() {
            return Err(LedgerValidationError::NegativeBudget(self.monthly_budget));
        }

        let mut seen = HashSet::with_capacity(self.transactions.len());
        for (index, txn) in self.transactions.iter().enumerate() {
            txn.validate()
                .map_err(|source| LedgerValidationError::InvalidTransaction { index, source })?;
            if !seen.insert(txn.id) {
                return Err(LedgerValidationError::DuplicateId(txn.id));
            }
        }
        Ok(())
    }
}

/// Ledger-level invariant violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerValidationError {
    NegativeBudget(Money),
    DuplicateId(TransactionId),
    InvalidTransaction {
        index: usize,
        source: TransactionValidationError,
    },
}

impl fmt::Display for LedgerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget(budget) => write!(f, "Monthly budget is negative: {}", budget),
            Self::DuplicateId(id) => write!(f, "Duplicate transaction id: {}", id),
            Self::InvalidTransaction { index, source } => {
                write!(f, "Transaction #{} is invalid: {}", index + 1, source)
            }
        }
    }
}

impl std::error::Error for LedgerValidationError {}
