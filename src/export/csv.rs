//! CSV Export functionality
//!
//! Exports the transaction list in ledger order, one row per transaction.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Column header of the transaction export
pub const CSV_HEADER: [&str; 6] = ["ID", "Date", "Title", "Type", "Category", "Amount"];

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for txn in transactions {
        let id = txn.id.as_uuid().to_string();
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.format_plain();

        csv_writer
            .write_record([
                id.as_str(),
                date.as_str(),
                txn.title.as_str(),
                txn.transaction_type.as_str(),
                txn.category.as_str(),
                amount.as_str(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionId, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_rows_and_quoting() {
        let txn = Transaction::from_draft(
            TransactionId::new(),
            TransactionDraft::new("Dinner, drinks", "42.5", TransactionType::Expense)
                .with_category("Entertainment")
                .with_date(NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()),
            NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
        )
        .unwrap();

        let mut out = Vec::new();
        export_transactions_csv(&[txn.clone()], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID,Date,Title,Type,Category,Amount");
        assert_eq!(
            lines[1],
            format!(
                "{},2024-05-04,\"Dinner, drinks\",expense,Entertainment,42.50",
                txn.id.as_uuid()
            )
        );
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut out = Vec::new();
        export_transactions_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ID,Date,Title,Type,Category,Amount\n");
    }
}
