//! Console session
//!
//! Drives one interactive session against an [`AccountStore`]:
//! 1. Loads the dataset and reports what was found
//! 2. Repeats menu → arguments → store operation → report
//! 3. Saves the dataset once on exit (or at end of input), offering a retry
//!    when the save fails
//!
//! Malformed input never reaches the store: the command is cancelled and the
//! menu is shown again. Store errors are printed and the session continues.

use crate::console::menu::MenuChoice;
use crate::core::account_store::{AccountStore, LoadOutcome};
use crate::core::traits::DatasetStorage;
use crate::io::csv_format::write_accounts_csv;
use crate::types::{AccountNumber, Amount, BankError};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{info, warn};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The dataset was saved
    Saved,
    /// The user gave up after a failed save; changes were not persisted
    Abandoned,
}

/// Why a command stopped before reaching the store
enum Interrupt {
    /// The user typed something that does not fit the requested field
    InvalidInput { field: &'static str, raw: String },
    /// Input ended
    Closed,
    /// Console I/O failed
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(error: io::Error) -> Self {
        Interrupt::Io(error)
    }
}

/// One trimmed line of user input
enum Line {
    Text(String),
    /// Not valid UTF-8; holds a lossy rendering for messages
    Undecodable(String),
}

impl Line {
    fn text(&self) -> Option<&str> {
        match self {
            Line::Text(text) => Some(text),
            Line::Undecodable(_) => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive console over any line-based input and output
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Consume the console and return its output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run a full session: load, command loop, save
    ///
    /// # Errors
    ///
    /// Only console I/O failures are returned. Store and persistence errors
    /// are reported to the user and handled inside the session.
    pub fn run<S: DatasetStorage>(
        &mut self,
        store: &mut AccountStore<S>,
    ) -> io::Result<SessionOutcome> {
        self.load(store)?;

        loop {
            if let Flow::Exit = self.step(store)? {
                break;
            }
        }

        self.finish(store)
    }

    fn load<S: DatasetStorage>(&mut self, store: &mut AccountStore<S>) -> io::Result<()> {
        let location = store.storage().location();
        match store.load() {
            Ok(LoadOutcome::Loaded(count)) => {
                writeln!(self.output, "Loaded {} account(s) from {}.", count, location)
            }
            Ok(LoadOutcome::Missing) => writeln!(
                self.output,
                "Data file {} not found. Starting with an empty list of accounts.",
                location
            ),
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                writeln!(
                    self.output,
                    "Continuing with {} account(s) in memory.",
                    store.len()
                )?;
                writeln!(
                    self.output,
                    "Warning: {} will be overwritten when you exit.",
                    location
                )
            }
        }
    }

    fn step<S: DatasetStorage>(&mut self, store: &mut AccountStore<S>) -> io::Result<Flow> {
        self.print_menu()?;

        let Some(line) = self.read_line()? else {
            return Ok(Flow::Exit);
        };

        let Some(choice) = line.text().and_then(MenuChoice::parse) else {
            writeln!(self.output, "Invalid choice. Please try again.")?;
            return Ok(Flow::Continue);
        };

        let result = match choice {
            MenuChoice::OpenAccount => self.open_account(store),
            MenuChoice::ShowAccount => self.show_account(store),
            MenuChoice::Deposit => self.deposit(store),
            MenuChoice::Withdraw => self.withdraw(store),
            MenuChoice::Transfer => self.transfer(store),
            MenuChoice::ListAccounts => self.list_accounts(store),
            MenuChoice::Exit => return Ok(Flow::Exit),
        };

        match result {
            Ok(()) => Ok(Flow::Continue),
            Err(Interrupt::InvalidInput { field, raw }) => {
                writeln!(
                    self.output,
                    "Invalid {} '{}'. Operation cancelled.",
                    field, raw
                )?;
                Ok(Flow::Continue)
            }
            Err(Interrupt::Closed) => Ok(Flow::Exit),
            Err(Interrupt::Io(e)) => Err(e),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Choose an action:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        write!(self.output, "Your choice: ")?;
        self.output.flush()
    }

    fn open_account<S: DatasetStorage>(
        &mut self,
        store: &mut AccountStore<S>,
    ) -> Result<(), Interrupt> {
        let number: AccountNumber = self.ask("Enter the new account number:", "account number")?;
        let owner = self.ask_text("Enter the account owner's name:", "owner name")?;
        let opening_balance: Amount = self.ask("Enter the opening balance:", "amount")?;

        match store.create_account(number, opening_balance, &owner) {
            Ok(account) => writeln!(
                self.output,
                "Opened account {} for {} with opening balance {}.",
                account.number, account.owner, account.balance
            )?,
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    fn show_account<S: DatasetStorage>(
        &mut self,
        store: &mut AccountStore<S>,
    ) -> Result<(), Interrupt> {
        let number: AccountNumber = self.ask("Enter the account number:", "account number")?;

        match store.find_account(number) {
            Ok(account) => {
                writeln!(self.output, "Account {}:", account.number)?;
                writeln!(self.output, "  Owner: {}", account.owner)?;
                writeln!(self.output, "  Balance: {}", account.balance)?;
            }
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    fn deposit<S: DatasetStorage>(&mut self, store: &mut AccountStore<S>) -> Result<(), Interrupt> {
        let number: AccountNumber =
            self.ask("Enter the account number to deposit into:", "account number")?;
        let amount: Amount = self.ask("Enter the amount to deposit:", "amount")?;

        match store.deposit(number, amount) {
            Ok(balance) => writeln!(
                self.output,
                "Deposited {} into account {}. New balance: {}.",
                amount, number, balance
            )?,
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    fn withdraw<S: DatasetStorage>(
        &mut self,
        store: &mut AccountStore<S>,
    ) -> Result<(), Interrupt> {
        let number: AccountNumber =
            self.ask("Enter the account number to withdraw from:", "account number")?;
        let amount: Amount = self.ask("Enter the amount to withdraw:", "amount")?;

        match store.withdraw(number, amount) {
            Ok(balance) => writeln!(
                self.output,
                "Withdrew {} from account {}. New balance: {}.",
                amount, number, balance
            )?,
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    fn transfer<S: DatasetStorage>(
        &mut self,
        store: &mut AccountStore<S>,
    ) -> Result<(), Interrupt> {
        let source: AccountNumber =
            self.ask("Enter the source account number:", "account number")?;
        let destination: AccountNumber =
            self.ask("Enter the destination account number:", "account number")?;
        let amount: Amount = self.ask("Enter the amount to transfer:", "amount")?;

        match store.transfer(source, destination, amount) {
            Ok(receipt) => {
                writeln!(
                    self.output,
                    "Transferred {} from account {} to account {}.",
                    amount, source, destination
                )?;
                writeln!(
                    self.output,
                    "New balance of account {}: {}.",
                    source, receipt.source_balance
                )?;
                writeln!(
                    self.output,
                    "New balance of account {}: {}.",
                    destination, receipt.destination_balance
                )?;
            }
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    fn list_accounts<S: DatasetStorage>(
        &mut self,
        store: &mut AccountStore<S>,
    ) -> Result<(), Interrupt> {
        if store.is_empty() {
            writeln!(self.output, "No accounts.")?;
            return Ok(());
        }

        write_accounts_csv(&store.accounts(), &mut self.output).map_err(io::Error::other)?;
        Ok(())
    }

    /// Save the dataset, asking whether to retry when saving fails
    fn finish<S: DatasetStorage>(
        &mut self,
        store: &mut AccountStore<S>,
    ) -> io::Result<SessionOutcome> {
        loop {
            match store.save() {
                Ok(count) => {
                    writeln!(
                        self.output,
                        "Saved {} account(s) to {}. Goodbye!",
                        count,
                        store.storage().location()
                    )?;
                    info!("session finished with saved dataset");
                    return Ok(SessionOutcome::Saved);
                }
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                    write!(self.output, "Retry saving? [y/N]: ")?;
                    self.output.flush()?;

                    let retry = self.read_line()?.is_some_and(|line| {
                        line.text().is_some_and(|answer| {
                            matches!(answer.to_lowercase().as_str(), "y" | "yes")
                        })
                    });

                    if !retry {
                        writeln!(self.output, "Exiting without saving.")?;
                        warn!("session finished without saving the dataset");
                        return Ok(SessionOutcome::Abandoned);
                    }
                }
            }
        }
    }

    fn report_error(&mut self, error: BankError) -> io::Result<()> {
        writeln!(self.output, "Error: {}", error)
    }

    /// Read one line as raw bytes so that invalid UTF-8 is reported, not fatal
    fn read_line(&mut self) -> io::Result<Option<Line>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let line = match String::from_utf8(bytes) {
            Ok(text) => Line::Text(text.trim().to_string()),
            Err(e) => Line::Undecodable(String::from_utf8_lossy(e.as_bytes()).trim().to_string()),
        };
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str, field: &'static str) -> Result<String, Interrupt> {
        writeln!(self.output, "{}", label)?;
        self.output.flush()?;
        match self.read_line()? {
            Some(Line::Text(text)) => Ok(text),
            Some(Line::Undecodable(raw)) => Err(Interrupt::InvalidInput { field, raw }),
            None => Err(Interrupt::Closed),
        }
    }

    fn ask<T: FromStr>(&mut self, label: &str, field: &'static str) -> Result<T, Interrupt> {
        let raw = self.prompt(label, field)?;
        raw.parse()
            .map_err(|_| Interrupt::InvalidInput { field, raw })
    }

    fn ask_text(&mut self, label: &str, field: &'static str) -> Result<String, Interrupt> {
        let raw = self.prompt(label, field)?;
        if raw.is_empty() {
            return Err(Interrupt::InvalidInput { field, raw });
        }
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryStorage;
    use crate::types::Account;
    use std::io::Cursor;

    /// Run a scripted session and return the store, outcome and transcript
    fn run_script(
        storage: MemoryStorage,
        script: &str,
    ) -> (AccountStore<MemoryStorage>, SessionOutcome, String) {
        let mut store = AccountStore::new(storage);
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let outcome = console.run(&mut store).unwrap();
        let transcript = String::from_utf8(console.into_output()).unwrap();
        (store, outcome, transcript)
    }

    #[test]
    fn test_exit_saves_and_reports() {
        let (store, outcome, transcript) = run_script(MemoryStorage::new(), "6\n");

        assert_eq!(outcome, SessionOutcome::Saved);
        assert!(transcript.contains("Data file <memory> not found"));
        assert!(transcript.contains("Saved 0 account(s) to <memory>. Goodbye!"));
        assert_eq!(store.storage().accounts(), Some(&[][..]));
    }

    #[test]
    fn test_end_of_input_behaves_like_exit() {
        let (store, outcome, _) = run_script(MemoryStorage::new(), "1\n100\nAlice\n500\n");

        assert_eq!(outcome, SessionOutcome::Saved);
        assert_eq!(
            store.storage().accounts().unwrap(),
            &[Account::new(100, 500, "Alice")]
        );
    }

    #[test]
    fn test_loads_existing_accounts() {
        let storage = MemoryStorage::with_accounts(vec![Account::new(1, 10, "One")]);
        let (_, _, transcript) = run_script(storage, "2\n1\n6\n");

        assert!(transcript.contains("Loaded 1 account(s) from <memory>."));
        assert!(transcript.contains("Account 1:\n  Owner: One\n  Balance: 10\n"));
    }

    #[test]
    fn test_load_error_is_reported_and_session_continues() {
        let storage = MemoryStorage::with_accounts(vec![
            Account::new(1, 10, "One"),
            Account::new(1, 20, "Again"),
        ]);
        let (store, outcome, transcript) = run_script(storage, "1\n5\nFive\n5\n6\n");

        assert!(transcript.contains("duplicate account number 1"));
        assert!(transcript.contains("Continuing with 0 account(s) in memory."));
        assert!(transcript.contains("Warning: <memory> will be overwritten when you exit."));
        assert_eq!(outcome, SessionOutcome::Saved);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_alice_and_bob_session() {
        let script = "1\n100\nAlice\n500\n\
                      1\n200\nBob\n0\n\
                      5\n100\n200\n300\n\
                      4\n100\n500\n\
                      6\n";
        let (store, outcome, transcript) = run_script(MemoryStorage::new(), script);

        assert_eq!(outcome, SessionOutcome::Saved);
        assert!(transcript.contains("Opened account 100 for Alice with opening balance 500."));
        assert!(transcript.contains("Transferred 300 from account 100 to account 200."));
        assert!(transcript.contains("New balance of account 100: 200."));
        assert!(transcript.contains("New balance of account 200: 300."));
        assert!(transcript
            .contains("Error: Insufficient funds in account 100: balance 200, requested 500"));
        assert_eq!(
            store.storage().accounts().unwrap(),
            &[Account::new(100, 200, "Alice"), Account::new(200, 300, "Bob")]
        );
    }

    #[test]
    fn test_deposit_and_withdraw_report_new_balance() {
        let storage = MemoryStorage::with_accounts(vec![Account::new(7, 100, "Seven")]);
        let (store, _, transcript) = run_script(storage, "3\n7\n50\n4\n7\n30\n6\n");

        assert!(transcript.contains("Deposited 50 into account 7. New balance: 150."));
        assert!(transcript.contains("Withdrew 30 from account 7. New balance: 120."));
        assert_eq!(store.find_account(7).unwrap().balance, 120);
    }

    #[test]
    fn test_store_errors_are_printed() {
        let storage = MemoryStorage::with_accounts(vec![Account::new(7, 100, "Seven")]);
        let script = "1\n7\nDuplicate\n0\n\
                      2\n8\n\
                      3\n7\n0\n\
                      1\n9\nNegative\n-5\n\
                      6\n";
        let (store, _, transcript) = run_script(storage, script);

        assert!(transcript.contains("Error: Account 7 already exists"));
        assert!(transcript.contains("Error: Account 8 not found"));
        assert!(transcript.contains("Error: Invalid amount 0 for deposit"));
        assert!(transcript.contains("Error: Invalid amount -5 for create"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_account(7).unwrap().balance, 100);
    }

    #[test]
    fn test_invalid_input_cancels_command() {
        let script = "hello\n\
                      1\nabc\n\
                      1\n5\n\n\
                      1\n5\nFive\nlots\n\
                      3\n-1\n\
                      6\n";
        let (store, outcome, transcript) = run_script(MemoryStorage::new(), script);

        assert_eq!(outcome, SessionOutcome::Saved);
        assert!(transcript.contains("Invalid choice. Please try again."));
        assert!(transcript.contains("Invalid account number 'abc'. Operation cancelled."));
        assert!(transcript.contains("Invalid owner name ''. Operation cancelled."));
        assert!(transcript.contains("Invalid amount 'lots'. Operation cancelled."));
        assert!(transcript.contains("Invalid account number '-1'. Operation cancelled."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_utf8_input_keeps_session_alive() {
        let mut store = AccountStore::new(MemoryStorage::new());
        let script: &[u8] = b"1\n100\nAlice\n500\n\xff\n1\n\xfe\xfd\n1\n200\n\xff\n6\n";
        let mut console = Console::new(Cursor::new(script), Vec::new());

        let outcome = console.run(&mut store).unwrap();
        let transcript = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(outcome, SessionOutcome::Saved);
        assert!(transcript.contains("Invalid choice. Please try again."));
        assert!(transcript
            .contains("Invalid account number '\u{fffd}\u{fffd}'. Operation cancelled."));
        assert!(transcript.contains("Invalid owner name '\u{fffd}'. Operation cancelled."));
        assert_eq!(
            store.storage().accounts().unwrap(),
            &[Account::new(100, 500, "Alice")]
        );
    }

    #[test]
    fn test_invalid_utf8_retry_answer_abandons_save() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes(true);
        let mut store = AccountStore::new(storage);
        let mut console = Console::new(Cursor::new(&b"6\n\xff\n"[..]), Vec::new());

        assert_eq!(console.run(&mut store).unwrap(), SessionOutcome::Abandoned);
    }

    #[test]
    fn test_list_accounts() {
        let storage = MemoryStorage::with_accounts(vec![
            Account::new(2, 20, "Bob"),
            Account::new(1, 10, "Alice"),
        ]);
        let (_, _, transcript) = run_script(storage, "7\n6\n");

        assert!(transcript.contains("number,owner,balance\n1,Alice,10\n2,Bob,20\n"));
    }

    #[test]
    fn test_list_accounts_when_empty() {
        let (_, _, transcript) = run_script(MemoryStorage::new(), "7\n6\n");
        assert!(transcript.contains("No accounts."));
    }

    #[test]
    fn test_failed_save_can_be_abandoned() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes(true);

        let (store, outcome, transcript) = run_script(storage, "1\n1\nOne\n1\n6\nn\n");

        assert_eq!(outcome, SessionOutcome::Abandoned);
        assert!(transcript.contains("Error: Persistence error for '<memory>': write refused"));
        assert!(transcript.contains("Exiting without saving."));
        assert_eq!(store.len(), 1);
        assert!(store.storage().accounts().is_none());
    }

    #[test]
    fn test_failed_save_retries_until_input_ends() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes(true);

        let (_, outcome, transcript) = run_script(storage, "6\ny\nyes\n");

        assert_eq!(outcome, SessionOutcome::Abandoned);
        assert_eq!(transcript.matches("Retry saving? [y/N]: ").count(), 3);
    }
}
