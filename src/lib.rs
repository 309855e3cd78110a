//! Bank Ledger Library
//! # Overview
//!
//! This library provides a single-user account store for a small set of bank
//! accounts, persisted as one JSON file, and the interactive console that
//! drives it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransferReceipt, BankError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - Account ownership, balance operations, load and save
//!   - [`core::traits`] - The dataset storage seam
//! - [`io`] - JSON dataset file, in-memory storage and CSV listing output
//! - [`console`] - Menu-driven command dispatcher
//!
//! # Operations
//!
//! - **Open account**: Register a new account number with an owner and opening balance
//! - **Show account**: Look an account up by number
//! - **Deposit**: Credit a positive amount to an account
//! - **Withdraw**: Debit a positive amount, never below a zero balance
//! - **Transfer**: Move a positive amount between two accounts
//!
//! # Persistence
//!
//! The whole dataset is read once at startup (a missing file means no accounts)
//! and written once on exit, replacing the previous file.

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod types;

pub use console::{Console, SessionOutcome};
pub use core::{AccountStore, DatasetStorage, LoadOutcome};
pub use io::{JsonFileStorage, MemoryStorage};
pub use types::{Account, AccountNumber, Amount, BankError, TransferReceipt};
