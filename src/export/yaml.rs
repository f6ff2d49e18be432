//! YAML Export functionality
//!
//! Writes the same document as the JSON export in a human-readable form.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::ExportDocument;
use crate::models::Ledger;

/// Export the ledger to YAML format
pub fn export_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let document = ExportDocument::from_ledger(ledger);

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
    write!(writer, "# Finance ledger export\n# Generated: {}\n\n", generated)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &document).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
