//! CLI commands for reports
//!
//! Summary, budget, aggregate reports and the category vocabulary.

use clap::{Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::report::{
    format_budget_usage, format_category_report, format_monthly_report, format_totals, separator,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{categories_for, Money, TransactionType};
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

/// Aggregate report kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Income and expenses per month
    Monthly,
    /// Expense totals per category
    Categories,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show totals and budget usage
    Summary,
    /// Show or set the monthly budget
    Budget {
        /// New monthly budget; negative values are clamped to zero
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Generate an aggregate report
    Report {
        /// Report to generate
        #[arg(value_enum)]
        kind: ReportKind,
        /// Emit the aggregate as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the category vocabulary
    Categories {
        /// Only list categories of this type
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
    },
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    service: &mut LedgerService<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary => {
            let summary = service.summary();
            println!("Finance Summary");
            println!("{}", separator(40));
            print!("{}", format_totals(summary, symbol));
            println!();
            print!("{}", format_budget_usage(&summary.budget, symbol));
        }

        ReportCommands::Budget { value: None } => {
            print!("{}", format_budget_usage(&service.summary().budget, symbol));
        }

        ReportCommands::Budget { value: Some(raw) } => {
            let requested = Money::parse(&raw).map_err(|e| {
                LedgerError::Validation(format!("Invalid budget '{}': {}", raw, e))
            })?;
            let applied = service.set_budget(requested);

            if applied != requested {
                println!(
                    "Budget cannot be negative; set to {}",
                    applied.format_with_symbol(symbol)
                );
            } else {
                println!("Monthly budget set to {}", applied.format_with_symbol(symbol));
            }
        }

        ReportCommands::Report { kind, json } => {
            let summary = service.summary();
            match (kind, json) {
                (ReportKind::Monthly, true) => print_json(&summary.monthly)?,
                (ReportKind::Categories, true) => print_json(&summary.categories)?,
                (ReportKind::Monthly, false) => {
                    print!("{}", format_monthly_report(&summary.monthly, symbol))
                }
                (ReportKind::Categories, false) => {
                    print!("{}", format_category_report(&summary.categories, symbol))
                }
            }
        }

        ReportCommands::Categories { transaction_type } => {
            let kinds = match transaction_type {
                Some(kind) => vec![kind],
                None => vec![TransactionType::Income, TransactionType::Expense],
            };

            for kind in kinds {
                println!("{}:", kind);
                for (i, name) in categories_for(kind).iter().enumerate() {
                    let marker = if i == 0 { " (default)" } else { "" };
                    println!("  {}{}", name, marker);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> LedgerResult<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{LedgerPersistence, MemoryStore};

    fn service() -> LedgerService<MemoryStore> {
        LedgerService::open(LedgerPersistence::new(MemoryStore::new()))
    }

    #[test]
    fn test_budget_negative_clamps() {
        let mut svc = service();
        handle_report_command(
            &mut svc,
            &Settings::default(),
            ReportCommands::Budget {
                value: Some("-250".into()),
            },
        )
        .unwrap();

        assert_eq!(svc.budget(), Money::zero());
    }

    #[test]
    fn test_budget_rejects_garbage() {
        let mut svc = service();
        let err = handle_report_command(
            &mut svc,
            &Settings::default(),
            ReportCommands::Budget {
                value: Some("lots".into()),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(svc.budget(), Money::from_units(5000));
    }

    #[test]
    fn test_read_only_reports_succeed_on_empty_ledger() {
        let mut svc = service();
        for cmd in [
            ReportCommands::Summary,
            ReportCommands::Budget { value: None },
            ReportCommands::Report {
                kind: ReportKind::Monthly,
                json: true,
            },
            ReportCommands::Report {
                kind: ReportKind::Categories,
                json: false,
            },
            ReportCommands::Categories {
                transaction_type: None,
            },
        ] {
            handle_report_command(&mut svc, &Settings::default(), cmd).unwrap();
        }
        assert!(svc.take_persist_warning().is_none());
    }
}
