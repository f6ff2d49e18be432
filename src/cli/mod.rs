//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod data;
pub mod report;
pub mod transaction;

pub use data::{handle_data_command, DataCommands, ExportFormat};
pub use report::{handle_report_command, ReportCommands, ReportKind};
pub use transaction::{handle_transaction_command, TransactionCommands};
