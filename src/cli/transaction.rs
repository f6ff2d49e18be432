//! Transaction CLI commands
//!
//! Implements the add, edit, delete and list commands.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{TransactionDraft, TransactionType};
use crate::services::{LedgerService, TransactionFilter};
use crate::storage::KeyValueStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short description
        title: String,
        /// Amount (e.g., "42.50"); must be positive
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Transaction type (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        transaction_type: TransactionType,
        /// Category name, defaults to the first category of the type
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (full or short prefix)
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New type; resets the category unless one is given
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID (full or short prefix)
        id: String,
    },
    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Filter key: all, income, expense or a category name
        #[arg(short, long)]
        filter: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    service: &mut LedgerService<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            transaction_type,
            category,
            date,
        } => {
            let mut draft = TransactionDraft::new(title, amount, transaction_type);
            draft.category = category;
            draft.date = date.as_deref().map(parse_date).transpose()?;

            let txn = service.add(draft)?;

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, symbol, date_format));
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            transaction_type,
            category,
            date,
        } => {
            let current = service.find(&id)?.clone();
            let mut draft = TransactionDraft::from_transaction(&current);

            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(kind) = transaction_type {
                draft.set_type(kind);
            }
            if let Some(category) = category {
                draft.category = Some(category);
            }
            if let Some(date_str) = date {
                draft.date = Some(parse_date(&date_str)?);
            }

            let updated = service.update(current.id, draft)?;

            println!("Updated transaction:");
            print!("{}", format_transaction_details(&updated, symbol, date_format));
        }

        TransactionCommands::Delete { id } => {
            let target = match service.find(&id) {
                Ok(txn) => txn.clone(),
                Err(e) if e.is_not_found() => {
                    println!("No transaction matches '{}'; nothing deleted", id);
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            if service.remove(target.id) {
                println!(
                    "Deleted transaction: {} ({} {})",
                    target.id,
                    target.date.format(date_format),
                    target.title
                );
            }
        }

        TransactionCommands::List { filter, limit } => {
            let key = filter.unwrap_or_else(|| settings.default_filter.clone());
            let filter = TransactionFilter::from_key(&key);
            let limit = limit.unwrap_or(settings.list_limit);

            let matching = service.filtered(&filter);
            let shown = &matching[..matching.len().min(limit)];

            print!("{}", format_transaction_register(shown, symbol, date_format));
            println!(
                "\nShowing {} of {} transactions (filter: {})",
                shown.len(),
                matching.len(),
                filter
            );
        }
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(date_str: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}
