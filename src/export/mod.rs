//! Export module for the finance ledger
//!
//! Provides data export in multiple formats:
//! - JSON: the export document, which is also the import format
//! - CSV: the transaction list (spreadsheet-compatible)
//! - YAML: the export document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_json, parse_ledger_document, ExportDocument, ExportSummary};
pub use yaml::export_yaml;
