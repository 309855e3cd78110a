//! Core traits for dataset persistence
//!
//! This module defines the trait abstraction that lets the account store load
//! and save its dataset without knowing where the dataset lives. The JSON file
//! used by the binary and the in-memory storage used by tests both implement it.

use crate::types::{Account, BankError};

/// Trait for reading and writing the whole dataset at once
///
/// Implementations never merge or append: `read_all` returns everything that
/// was last written, and `write_all` replaces it.
pub trait DatasetStorage {
    /// Human-readable location of the dataset, used in messages and logs
    fn location(&self) -> String;

    /// Read every persisted account
    ///
    /// Returns `Ok(None)` when no dataset exists yet. A dataset that exists but
    /// cannot be parsed is a `PersistenceError`.
    fn read_all(&self) -> Result<Option<Vec<Account>>, BankError>;

    /// Overwrite the persisted dataset with `accounts`
    fn write_all(&mut self, accounts: &[Account]) -> Result<(), BankError>;
}
