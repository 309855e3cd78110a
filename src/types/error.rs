//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while operating on the
//! account store. Errors are designed to be descriptive and user-friendly, since
//! the console prints them directly.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Duplicate or missing account numbers
//! - **Validation Errors**: Non-positive amounts, insufficient funds
//! - **Arithmetic Errors**: Balance overflow
//! - **Persistence Errors**: Dataset file could not be read, parsed or written
//!
//! Every variant is recoverable: a failed operation leaves the store unchanged.

use crate::types::account::{AccountNumber, Amount};
use std::path::Path;
use thiserror::Error;

/// Main error type for the bank ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// An account with this number already exists
    #[error("Account {number} already exists")]
    DuplicateAccount {
        /// The number that is already taken
        number: AccountNumber,
    },

    /// No account with this number exists
    #[error("Account {number} not found")]
    AccountNotFound {
        /// The number that was looked up
        number: AccountNumber,
    },

    /// Amount is not acceptable for the operation
    ///
    /// Deposits, withdrawals and transfers require a strictly positive amount.
    /// Opening balances must not be negative.
    #[error("Invalid amount {amount} for {operation}")]
    InvalidAmount {
        /// The rejected amount
        amount: Amount,
        /// Operation that rejected it
        operation: String,
    },

    /// Balance is lower than the requested amount
    #[error("Insufficient funds in account {number}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account being debited
        number: AccountNumber,
        /// Its current balance
        balance: Amount,
        /// Requested amount
        requested: Amount,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {number}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account being credited
        number: AccountNumber,
    },

    /// Dataset file could not be read, parsed or written
    #[error("Persistence error for '{path}': {message}")]
    PersistenceError {
        /// Location of the dataset
        path: String,
        /// Description of the failure
        message: String,
    },
}

// Helper functions for creating common errors

impl BankError {
    /// Create a DuplicateAccount error
    pub fn duplicate_account(number: AccountNumber) -> Self {
        BankError::DuplicateAccount { number }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(number: AccountNumber) -> Self {
        BankError::AccountNotFound { number }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Amount, operation: &str) -> Self {
        BankError::InvalidAmount {
            amount,
            operation: operation.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(number: AccountNumber, balance: Amount, requested: Amount) -> Self {
        BankError::InsufficientFunds {
            number,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, number: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            number,
        }
    }

    /// Create a PersistenceError for the dataset at `path`
    pub fn persistence(path: impl AsRef<Path>, message: impl ToString) -> Self {
        BankError::PersistenceError {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a PersistenceError from an I/O failure on `path`
    pub fn io(path: impl AsRef<Path>, error: std::io::Error) -> Self {
        Self::persistence(path, error)
    }

    /// Create a PersistenceError from a JSON (de)serialization failure on `path`
    pub fn json(path: impl AsRef<Path>, error: serde_json::Error) -> Self {
        Self::persistence(path, format!("malformed dataset: {}", error))
    }

    /// Whether this error came from the dataset rather than from an account operation
    pub fn is_persistence(&self) -> bool {
        matches!(self, BankError::PersistenceError { .. })
    }
}
