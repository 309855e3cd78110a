//! Account-related types for the bank ledger
//!
//! This module defines the Account record as it lives in memory and in the
//! dataset file, along with the identifier and amount aliases used throughout
//! the crate.

use serde::{Deserialize, Serialize};

/// Account number
///
/// Unique within a store. Supports numbers from 0 to 4,294,967,295
pub type AccountNumber = u32;

/// Currency amount in whole units
///
/// Signed so that rejected negative input can be reported as-is.
pub type Amount = i64;

/// A single bank account
///
/// Field names are serialized in PascalCase (`Number`, `Balance`, `Owner`),
/// which is the layout of existing `bank_data.json` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    /// The account number
    pub number: AccountNumber,

    /// Current balance in whole currency units
    ///
    /// Never driven below zero by a withdrawal or a transfer.
    pub balance: Amount,

    /// Name of the account holder
    pub owner: String,
}

impl Account {
    /// Create a new account record
    ///
    /// # Arguments
    ///
    /// * `number` - The account number
    /// * `balance` - The opening balance
    /// * `owner` - The account holder's name
    pub fn new(number: AccountNumber, balance: Amount, owner: impl Into<String>) -> Self {
        Account {
            number,
            balance,
            owner: owner.into(),
        }
    }
}

/// Balances of both accounts after a successful transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    pub source_balance: Amount,
    pub destination_balance: Amount,
}
