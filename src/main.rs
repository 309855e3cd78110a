//! Bank Ledger CLI
//!
//! Interactive console for managing bank accounts stored in a JSON file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file accounts.json
//! BANK_DATA_FILE=accounts.json cargo run -- --log-level debug
//! ```
//!
//! The program loads the dataset file (if present), shows a menu on stdout and
//! reads commands from stdin. Choosing "Exit" or closing stdin saves every
//! account back to the dataset file. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Dataset saved
//! - 1: Dataset not saved (save abandoned) or console I/O error

use bank_ledger::cli;
use bank_ledger::{AccountStore, Console, JsonFileStorage, SessionOutcome};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    // RUST_LOG wins over --log-level; logs stay off stdout
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(data_file = %args.data_file.display(), "starting bank ledger");

    let mut store = AccountStore::new(JsonFileStorage::new(args.data_file.clone()));
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match console.run(&mut store) {
        Ok(SessionOutcome::Saved) => {}
        Ok(SessionOutcome::Abandoned) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
