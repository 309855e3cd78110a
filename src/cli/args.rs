use crate::io::DEFAULT_DATA_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Manage bank accounts from an interactive console
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Manage bank accounts from an interactive console", long_about = None)]
pub struct CliArgs {
    /// Dataset file loaded at startup and overwritten on exit
    #[arg(
        long = "data-file",
        value_name = "PATH",
        env = "BANK_DATA_FILE",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the JSON dataset file"
    )]
    pub data_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter for stderr output, e.g. 'info' or 'bank_ledger=debug' (RUST_LOG takes precedence)"
    )]
    pub log_level: String,
}
