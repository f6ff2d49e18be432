//! Ledger persistence
//!
//! Saves and restores the ledger record under a fixed key of a
//! [`KeyValueStore`], and produces/consumes the export document.
//!
//! Reads never fail: an empty slot or a record that doesn't parse is logged
//! and reported as absent, so the caller starts from an empty ledger.

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::{export_json, parse_ledger_document};
use crate::models::Ledger;

use super::kv::KeyValueStore;

/// Key the ledger record is stored under
pub const LEDGER_KEY: &str = "personalFinanceData";

/// Persistence adapter over a byte store
#[derive(Debug)]
pub struct LedgerPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> LedgerPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Write `{transactions, monthlyBudget}` under [`LEDGER_KEY`]
    ///
    /// The record is fully serialized before the store is touched, so a
    /// serialization failure leaves the previous record in place.
    pub fn save(&mut self, ledger: &Ledger) -> LedgerResult<()> {
        let bytes = serde_json::to_vec(ledger)
            .map_err(|e| LedgerError::Storage(format!("Failed to serialize ledger: {}", e)))?;
        self.store.put(LEDGER_KEY, &bytes)?;
        tracing::debug!(
            transactions = ledger.len(),
            bytes = bytes.len(),
            "ledger saved"
        );
        Ok(())
    }

    /// Restore the saved ledger, or `None` if there is nothing usable
    pub fn load(&self) -> Option<Ledger> {
        let bytes = match self.store.get(LEDGER_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("could not read saved ledger: {}", e);
                return None;
            }
        };

        match parse_ledger_document(&bytes) {
            Ok(ledger) => {
                tracing::debug!(transactions = ledger.len(), "ledger loaded");
                Some(ledger)
            }
            Err(e) => {
                tracing::warn!("ignoring unreadable saved ledger: {}", e);
                None
            }
        }
    }

    /// Serialize the export document (pretty JSON)
    pub fn export_snapshot(&self, ledger: &Ledger) -> LedgerResult<Vec<u8>> {
        let mut bytes = Vec::new();
        export_json(ledger, &mut bytes, true)?;
        Ok(bytes)
    }

    /// Parse and validate an import blob. Nothing is stored here; the caller
    /// swaps the live ledger and saves once this succeeds.
    pub fn import_snapshot(&self, blob: &[u8]) -> LedgerResult<Ledger> {
        parse_ledger_document(blob)
    }
}
