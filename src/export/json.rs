//! JSON export/import documents
//!
//! The export document is the persisted record plus a derived summary:
//! `{ transactions, monthlyBudget, summary: { balance, totalIncome, totalExpenses } }`.
//! Import accepts the persisted-record shape and ignores `summary`.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Money, Transaction, DEFAULT_MONTHLY_BUDGET};
use crate::reports::totals;

/// Derived figures included for external consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub balance: Money,
    pub total_income: Money,
    pub total_expenses: Money,
}

/// Self-contained export document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub transactions: &'a [Transaction],
    pub monthly_budget: Money,
    pub summary: ExportSummary,
}

impl<'a> ExportDocument<'a> {
    /// Project a ledger into an export document
    pub fn from_ledger(ledger: &'a Ledger) -> Self {
        let totals = totals(&ledger.transactions);
        Self {
            transactions: &ledger.transactions,
            monthly_budget: ledger.monthly_budget,
            summary: ExportSummary {
                balance: totals.balance,
                total_income: totals.income,
                total_expenses: totals.expenses,
            },
        }
    }
}

/// Export the ledger as a JSON document
pub fn export_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let document = ExportDocument::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &document)
    } else {
        serde_json::to_writer(writer, &document)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))
}

/// Incoming document; `null` fields fall back like missing ones
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LedgerDocument {
    #[serde(default)]
    transactions: Option<Vec<Transaction>>,
    #[serde(default)]
    monthly_budget: Option<Money>,
}

/// Parse and fully validate a ledger document
///
/// Missing `transactions` means an empty ledger, a missing `monthlyBudget`
/// means the default budget and a negative budget clamps to zero. Unknown
/// categories are kept as-is.
pub fn parse_ledger_document(bytes: &[u8]) -> LedgerResult<Ledger> {
    let document: LedgerDocument = serde_json::from_slice(bytes)
        .map_err(|e| LedgerError::Import(format!("Invalid file format: {}", e)))?;

    let mut ledger = Ledger {
        transactions: document.transactions.unwrap_or_default(),
        monthly_budget: DEFAULT_MONTHLY_BUDGET,
    };
    ledger.set_budget(document.monthly_budget.unwrap_or(DEFAULT_MONTHLY_BUDGET));

    ledger
        .validate()
        .map_err(|e| LedgerError::Import(e.to_string()))?;

    Ok(ledger)
}
