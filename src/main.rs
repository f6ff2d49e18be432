use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use finance_ledger::cli::{
    handle_data_command, handle_report_command, handle_transaction_command, DataCommands,
    ReportCommands, TransactionCommands,
};
use finance_ledger::config::paths::{LedgerPaths, DATA_DIR_ENV};
use finance_ledger::config::settings::Settings;
use finance_ledger::services::LedgerService;
use finance_ledger::storage::open_file_persistence;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal finance ledger",
    long_about = "Track income and expenses, watch a monthly budget and \
                  review monthly and per-category totals from the command line."
)]
struct Cli {
    /// Directory holding settings and ledger data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Data(DataCommands),

    /// Show current configuration and paths
    Config {
        /// Write the current settings file (with defaults filled in)
        #[arg(long)]
        init: bool,
    },
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let command = match cli.command {
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
            println!("Finance Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default filter:  {}", settings.default_filter);
            println!("  List limit:      {}", settings.list_limit);
            println!("  Log level:       {}", settings.log_level);
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("Finance Ledger - personal income and expense tracking");
            println!();
            println!("Run 'finance --help' for usage information.");
            return Ok(());
        }
    };

    let mut service = LedgerService::open(open_file_persistence(&paths)?);

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut service, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&mut service, &settings, cmd)?,
        Commands::Data(cmd) => handle_data_command(&mut service, cmd)?,
        Commands::Config { .. } => {}
    }

    if let Some(warning) = service.take_persist_warning() {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}
