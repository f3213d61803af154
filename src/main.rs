use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use finance_ledger::cli::{handle_add, handle_report, run_menu, AddArgs, Prompter, ReportArgs};
use finance_ledger::config::LedgerPaths;
use finance_ledger::storage::TransactionStore;
use finance_ledger::tui::TerminalChart;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger backed by a CSV file",
    long_about = "Records income and expense transactions in a CSV file and \
                  summarizes them over any date range. Run without a command \
                  for the interactive menu."
)]
struct Cli {
    /// Path of the CSV store
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log store and query activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Create the store file with its header row if it does not exist
    Init,

    /// Add a transaction
    Add(AddArgs),

    /// Show transactions and totals within a date range
    Report(ReportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let paths = LedgerPaths::resolve(cli.file);
    let store = TransactionStore::from_paths(&paths);
    let mut stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut prompter = Prompter::new(io::stdin().lock(), stdout);
            run_menu(&store, &mut prompter, &mut TerminalChart)?;
        }
        Commands::Init => {
            if store.initialize()? {
                println!("Created transaction store at {}", store.path().display());
            } else {
                println!("Transaction store already exists at {}", store.path().display());
            }
        }
        Commands::Add(args) => {
            handle_add(&store, &args, &mut stdout)?;
        }
        Commands::Report(args) => {
            handle_report(&store, &args, &mut TerminalChart, &mut stdout)?;
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
