//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records, identifiers and transfer results
//! - `error`: Error types for the bank ledger

pub mod account;
pub mod error;

pub use account::{Account, AccountNumber, Amount, TransferReceipt};
pub use error::BankError;
