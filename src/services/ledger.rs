//! Ledger service
//!
//! Owns the live ledger and drives every mutation through the same cycle:
//! validate, mutate in memory, recompute the summary, flush to the store.
//! A failed flush never undoes the in-memory change; it is logged and kept
//! as a [`PersistWarning`] for the caller to display.

use chrono::NaiveDate;
use std::fmt;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Money, Transaction, TransactionDraft, TransactionId};
use crate::reports::Summary;
use crate::storage::{KeyValueStore, LedgerPersistence};

use super::filter::TransactionFilter;

/// A mutation that was applied in memory but could not be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistWarning {
    pub action: &'static str,
    pub error: String,
}

impl fmt::Display for PersistWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Changes from '{}' were kept but could not be saved: {}",
            self.action, self.error
        )
    }
}

/// Service for transaction and budget management
pub struct LedgerService<S: KeyValueStore> {
    ledger: Ledger,
    summary: Summary,
    persistence: LedgerPersistence<S>,
    persist_warning: Option<PersistWarning>,
}

impl<S: KeyValueStore> LedgerService<S> {
    /// Restore the saved ledger, or start empty with the default budget
    pub fn open(persistence: LedgerPersistence<S>) -> Self {
        let ledger = persistence.load().unwrap_or_default();
        let summary = Summary::compute(&ledger.transactions, ledger.monthly_budget);
        Self {
            ledger,
            summary,
            persistence,
            persist_warning: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Derived views, consistent with the latest mutation
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn budget(&self) -> Money {
        self.ledger.monthly_budget
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn persistence(&self) -> &LedgerPersistence<S> {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut LedgerPersistence<S> {
        &mut self.persistence
    }

    /// Take the pending save failure, if any
    pub fn take_persist_warning(&mut self) -> Option<PersistWarning> {
        self.persist_warning.take()
    }

    /// Owned snapshot of all transactions, newest first
    pub fn list(&self) -> Vec<Transaction> {
        self.ledger.transactions.clone()
    }

    /// Borrowed view of all transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    /// Transactions matching `filter`, in ledger order
    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        filter.apply(&self.ledger.transactions)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.ledger.get(id)
    }

    /// Resolve a full id, its display form ("txn-1a2b3c4d") or a unique
    /// hex prefix
    pub fn find(&self, identifier: &str) -> LedgerResult<&Transaction> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self
                .ledger
                .get(id)
                .ok_or_else(|| LedgerError::transaction_not_found(identifier));
        }

        let mut matches = self
            .ledger
            .transactions
            .iter()
            .filter(|t| t.id.matches_prefix(identifier));

        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (None, _) => Err(LedgerError::transaction_not_found(identifier)),
            (Some(_), Some(_)) => Err(LedgerError::Validation(format!(
                "Transaction reference '{}' is ambiguous; use more characters",
                identifier
            ))),
        }
    }

    /// Validate a draft and prepend it as a new transaction
    pub fn add(&mut self, draft: TransactionDraft) -> LedgerResult<Transaction> {
        let txn = Transaction::from_draft(self.fresh_id(), draft, today())
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.ledger.prepend(txn.clone());
        tracing::debug!(id = %txn.id, "transaction added");
        self.commit("add");

        Ok(txn)
    }

    /// Replace every field but the id, keeping the entry's position
    pub fn update(&mut self, id: TransactionId, draft: TransactionDraft) -> LedgerResult<Transaction> {
        let txn = Transaction::from_draft(id, draft, today())
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if !self.ledger.replace(txn.clone()) {
            return Err(LedgerError::transaction_not_found(id.to_string()));
        }
        tracing::debug!(id = %id, "transaction updated");
        self.commit("update");

        Ok(txn)
    }

    /// Remove a transaction. Removing an unknown id is a no-op.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        match self.ledger.remove(id) {
            Some(_) => {
                tracing::debug!(id = %id, "transaction removed");
                self.commit("delete");
                true
            }
            None => false,
        }
    }

    /// Set the monthly budget; negative values clamp to zero
    pub fn set_budget(&mut self, budget: Money) -> Money {
        self.ledger.set_budget(budget);
        tracing::debug!(budget = %self.ledger.monthly_budget, "budget set");
        self.commit("budget");
        self.ledger.monthly_budget
    }

    /// Serialize the export document for the current state
    pub fn export_snapshot(&self) -> LedgerResult<Vec<u8>> {
        self.persistence.export_snapshot(&self.ledger)
    }

    /// Replace the whole ledger with an imported document
    ///
    /// The blob is parsed and validated completely before anything changes;
    /// on error the live ledger is untouched.
    pub fn import_snapshot(&mut self, blob: &[u8]) -> LedgerResult<&Ledger> {
        let imported = self.persistence.import_snapshot(blob)?;

        tracing::info!(
            transactions = imported.len(),
            budget = %imported.monthly_budget,
            "ledger imported"
        );
        self.ledger = imported;
        self.commit("import");

        Ok(&self.ledger)
    }

    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::new();
            if !self.ledger.contains(id) {
                return id;
            }
        }
    }

    fn commit(&mut self, action: &'static str) {
        self.summary = Summary::compute(&self.ledger.transactions, self.ledger.monthly_budget);

        if let Err(e) = self.persistence.save(&self.ledger) {
            tracing::warn!(action, "failed to save ledger: {}", e);
            self.persist_warning = Some(PersistWarning {
                action,
                error: e.to_string(),
            });
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
