//! In-memory dataset storage
//!
//! Keeps the "persisted" dataset in a `Vec` so that the account store can be
//! exercised without touching the filesystem. Writes can be made to fail to
//! test the recoverable save path.

use crate::core::traits::DatasetStorage;
use crate::types::{Account, BankError};

/// Dataset storage held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    accounts: Option<Vec<Account>>,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create a storage with no dataset (as if the file did not exist)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `accounts`
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        MemoryStorage {
            accounts: Some(accounts),
            fail_writes: false,
        }
    }

    /// The last dataset written, if any
    pub fn accounts(&self) -> Option<&[Account]> {
        self.accounts.as_deref()
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl DatasetStorage for MemoryStorage {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn read_all(&self) -> Result<Option<Vec<Account>>, BankError> {
        Ok(self.accounts.clone())
    }

    fn write_all(&mut self, accounts: &[Account]) -> Result<(), BankError> {
        if self.fail_writes {
            return Err(BankError::persistence(self.location(), "write refused"));
        }
        self.accounts = Some(accounts.to_vec());
        Ok(())
    }
}
