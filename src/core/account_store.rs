//! Account store module
//!
//! This module provides the `AccountStore` struct which owns every account for
//! the lifetime of the process and implements the operations on them.
//!
//! The AccountStore is responsible for:
//! - Opening accounts under unique numbers
//! - Looking accounts up by number
//! - Deposits, withdrawals and transfers with validated, checked arithmetic
//! - Loading and saving the whole dataset through a [`DatasetStorage`]
//!
//! Every operation either succeeds completely or returns a [`BankError`] with
//! the in-memory accounts left exactly as they were.

use crate::core::traits::DatasetStorage;
use crate::types::{Account, AccountNumber, Amount, BankError, TransferReceipt};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Result of [`AccountStore::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The dataset existed and replaced the in-memory accounts
    Loaded(usize),
    /// No dataset exists yet; the in-memory accounts were left untouched
    Missing,
}

/// Owns all accounts and their persisted dataset
///
/// The store keeps an in-memory map of account numbers to accounts. It is the
/// only owner of `Account` values; callers receive shared references or
/// copies of balances.
pub struct AccountStore<S: DatasetStorage> {
    /// Map of account numbers to accounts
    accounts: HashMap<AccountNumber, Account>,

    /// Where the dataset is loaded from and saved to
    storage: S,
}

impl<S: DatasetStorage> AccountStore<S> {
    /// Create an empty store backed by `storage`
    ///
    /// Nothing is read until [`load`](Self::load) is called.
    pub fn new(storage: S) -> Self {
        AccountStore {
            accounts: HashMap::new(),
            storage,
        }
    }

    /// The storage backing this store
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage backing this store
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Open a new account
    ///
    /// # Arguments
    ///
    /// * `number` - The account number (must not be in use)
    /// * `opening_balance` - The starting balance (must not be negative)
    /// * `owner` - The account holder's name
    ///
    /// # Returns
    ///
    /// A reference to the newly created account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An account with `number` already exists (`DuplicateAccount`)
    /// - `opening_balance` is negative (`InvalidAmount`)
    pub fn create_account(
        &mut self,
        number: AccountNumber,
        opening_balance: Amount,
        owner: &str,
    ) -> Result<&Account, BankError> {
        if self.accounts.contains_key(&number) {
            warn!(number, "rejected account creation: number already in use");
            return Err(BankError::duplicate_account(number));
        }

        if opening_balance < 0 {
            warn!(
                number,
                opening_balance,
                "rejected account creation: negative opening balance"
            );
            return Err(BankError::invalid_amount(opening_balance, "create"));
        }

        debug!(number, opening_balance, owner, "account created");
        Ok(&*self
            .accounts
            .entry(number)
            .or_insert_with(|| Account::new(number, opening_balance, owner)))
    }

    /// Look up an account by number
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this number.
    pub fn find_account(&self, number: AccountNumber) -> Result<&Account, BankError> {
        self.accounts
            .get(&number)
            .ok_or_else(|| BankError::account_not_found(number))
    }

    fn find_account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(&number)
            .ok_or_else(|| BankError::account_not_found(number))
    }

    /// Get all accounts sorted by account number
    ///
    /// Sorting gives deterministic listings and dataset files.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.number);
        accounts
    }

    /// Deposit funds into an account
    ///
    /// # Arguments
    ///
    /// * `number` - The account to credit
    /// * `amount` - The amount to deposit (must be positive)
    ///
    /// # Returns
    ///
    /// The new balance of the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - `amount` is zero or negative
    /// - The new balance would overflow
    pub fn deposit(&mut self, number: AccountNumber, amount: Amount) -> Result<Amount, BankError> {
        let account = self.find_account_mut(number)?;

        if amount <= 0 {
            warn!(number, amount, "rejected deposit: amount must be positive");
            return Err(BankError::invalid_amount(amount, "deposit"));
        }

        let new_balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", number))?;

        account.balance = new_balance;
        debug!(number, amount, balance = new_balance, "deposit applied");

        Ok(new_balance)
    }

    /// Withdraw funds from an account
    ///
    /// # Arguments
    ///
    /// * `number` - The account to debit
    /// * `amount` - The amount to withdraw (must be positive)
    ///
    /// # Returns
    ///
    /// The new balance of the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - `amount` is zero or negative
    /// - The balance is lower than `amount`
    pub fn withdraw(&mut self, number: AccountNumber, amount: Amount) -> Result<Amount, BankError> {
        let account = self.find_account_mut(number)?;

        if amount <= 0 {
            warn!(number, amount, "rejected withdrawal: amount must be positive");
            return Err(BankError::invalid_amount(amount, "withdraw"));
        }

        if account.balance < amount {
            warn!(
                number,
                amount,
                balance = account.balance,
                "rejected withdrawal: insufficient funds"
            );
            return Err(BankError::insufficient_funds(
                number,
                account.balance,
                amount,
            ));
        }

        let new_balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdraw", number))?;

        account.balance = new_balance;
        debug!(number, amount, balance = new_balance, "withdrawal applied");

        Ok(new_balance)
    }

    /// Move funds from one account to another
    ///
    /// Both balances are computed before either is written, so a failure
    /// leaves both accounts unchanged. Transferring an account to itself is
    /// validated like any other transfer and leaves the balance as it was.
    ///
    /// # Arguments
    ///
    /// * `source` - The account to debit
    /// * `destination` - The account to credit
    /// * `amount` - The amount to move (must be positive)
    ///
    /// # Returns
    ///
    /// The new balances of both accounts
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either account does not exist (the source is checked first)
    /// - `amount` is zero or negative
    /// - The source balance is lower than `amount`
    /// - The destination balance would overflow
    pub fn transfer(
        &mut self,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Amount,
    ) -> Result<TransferReceipt, BankError> {
        let source_balance = self.find_account(source)?.balance;
        let destination_balance = self.find_account(destination)?.balance;

        if amount <= 0 {
            warn!(
                source,
                destination,
                amount,
                "rejected transfer: amount must be positive"
            );
            return Err(BankError::invalid_amount(amount, "transfer"));
        }

        if source_balance < amount {
            warn!(
                source,
                destination,
                amount,
                balance = source_balance,
                "rejected transfer: insufficient funds"
            );
            return Err(BankError::insufficient_funds(
                source,
                source_balance,
                amount,
            ));
        }

        if source == destination {
            debug!(source, amount, "self-transfer left balance unchanged");
            return Ok(TransferReceipt {
                source_balance,
                destination_balance,
            });
        }

        let new_source_balance = source_balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("transfer", source))?;

        let new_destination_balance = destination_balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("transfer", destination))?;

        self.find_account_mut(source)?.balance = new_source_balance;
        self.find_account_mut(destination)?.balance = new_destination_balance;
        debug!(source, destination, amount, "transfer applied");

        Ok(TransferReceipt {
            source_balance: new_source_balance,
            destination_balance: new_destination_balance,
        })
    }

    /// Load the dataset from storage
    ///
    /// On success the in-memory accounts are replaced entirely by the dataset.
    /// A missing dataset is not an error and leaves the accounts untouched.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the dataset cannot be read or parsed, or
    /// if it lists the same account number twice. The in-memory accounts are
    /// left as they were.
    pub fn load(&mut self) -> Result<LoadOutcome, BankError> {
        let location = self.storage.location();

        let records = match self.storage.read_all() {
            Ok(Some(records)) => records,
            Ok(None) => {
                info!(%location, "no dataset found, starting with current accounts");
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => {
                warn!(%location, error = %e, "failed to load dataset");
                return Err(e);
            }
        };

        let mut accounts = HashMap::with_capacity(records.len());
        for account in records {
            let number = account.number;
            if accounts.insert(number, account).is_some() {
                warn!(%location, number, "dataset lists an account number twice");
                return Err(BankError::persistence(
                    &location,
                    format!("duplicate account number {}", number),
                ));
            }
        }

        let count = accounts.len();
        self.accounts = accounts;
        info!(%location, accounts = count, "dataset loaded");

        Ok(LoadOutcome::Loaded(count))
    }

    /// Save every account to storage, replacing the previous dataset
    ///
    /// # Returns
    ///
    /// The number of accounts written
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the dataset cannot be written. The
    /// in-memory accounts are unaffected and the save can be retried.
    pub fn save(&mut self) -> Result<usize, BankError> {
        let snapshot: Vec<Account> = self.accounts().into_iter().cloned().collect();

        if let Err(e) = self.storage.write_all(&snapshot) {
            warn!(location = %self.storage.location(), error = %e, "failed to save dataset");
            return Err(e);
        }

        info!(location = %self.storage.location(), accounts = snapshot.len(), "dataset saved");
        Ok(snapshot.len())
    }
}
