//! CLI commands for data export and import
//!
//! JSON is the round-trip format; CSV and YAML are write-only views.

use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_transactions_csv, export_yaml};
use crate::services::LedgerService;
use crate::storage::{write_atomic, KeyValueStore};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON document (can be imported again)
    Json,
    /// CSV format (transactions only)
    Csv,
    /// YAML document (human-readable)
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension, falling back to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Self::Csv,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Data subcommands
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format, inferred from the extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
    /// Replace the ledger with a previously exported JSON document
    Import {
        /// Input file path
        input: PathBuf,
    },
}

/// Handle a data command
pub fn handle_data_command<S: KeyValueStore>(
    service: &mut LedgerService<S>,
    cmd: DataCommands,
) -> LedgerResult<()> {
    match cmd {
        DataCommands::Export { output, format } => {
            let format = format.unwrap_or_else(|| ExportFormat::from_path(&output));
            let bytes = render_export(service, format)?;

            write_atomic(&output, &bytes).map_err(|e| {
                LedgerError::Export(format!("Failed to write {}: {}", output.display(), e))
            })?;

            println!(
                "Exported {} transactions to: {}",
                service.len(),
                output.display()
            );
            if format == ExportFormat::Csv {
                println!("Note: CSV exports transactions only. Use JSON for a re-importable backup.");
            }
        }

        DataCommands::Import { input } => {
            let blob = std::fs::read(&input).map_err(|e| {
                LedgerError::Import(format!("Failed to read {}: {}", input.display(), e))
            })?;

            let ledger = service.import_snapshot(&blob)?;
            println!(
                "Imported {} transactions (monthly budget {})",
                ledger.len(),
                ledger.monthly_budget
            );
        }
    }

    Ok(())
}

/// Serialize the current ledger in the requested format
pub fn render_export<S: KeyValueStore>(
    service: &LedgerService<S>,
    format: ExportFormat,
) -> LedgerResult<Vec<u8>> {
    if format == ExportFormat::Json {
        return service.export_snapshot();
    }

    let mut bytes = Vec::new();
    match format {
        ExportFormat::Csv => export_transactions_csv(service.transactions(), &mut bytes)?,
        _ => export_yaml(service.ledger(), &mut bytes)?,
    }
    Ok(bytes)
}
