//! CSV rendering of the account listing
//!
//! The "list all accounts" command prints every account as CSV with columns
//! `number, owner, balance`. This module is pure with respect to its writer,
//! so it is tested against an in-memory buffer.

use crate::types::Account;
use std::io::Write;

/// Write accounts in CSV format
///
/// Writes accounts with columns: number, owner, balance.
/// Accounts are sorted by account number for deterministic output.
///
/// # Arguments
///
/// * `accounts` - Accounts to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv(accounts: &[&Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["number", "owner", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.number);

    for account in sorted_accounts {
        writer
            .write_record(&[
                account.number.to_string(),
                account.owner.clone(),
                account.balance.to_string(),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty_accounts(vec![], "number,owner,balance\n")]
    #[case::single_account(
        vec![Account::new(100, 500, "Alice")],
        "number,owner,balance\n100,Alice,500\n"
    )]
    #[case::sorted_by_number(
        vec![
            Account::new(3, 30, "Carol"),
            Account::new(1, 10, "Alice"),
            Account::new(2, 20, "Bob"),
        ],
        "number,owner,balance\n1,Alice,10\n2,Bob,20\n3,Carol,30\n"
    )]
    #[case::owner_needing_quotes(
        vec![Account::new(7, 0, "Doe, Jane")],
        "number,owner,balance\n7,\"Doe, Jane\",0\n"
    )]
    #[case::negative_loaded_balance(
        vec![Account::new(9, -15, "Legacy")],
        "number,owner,balance\n9,Legacy,-15\n"
    )]
    fn test_write_accounts_csv(#[case] accounts: Vec<Account>, #[case] expected_output: &str) {
        let refs: Vec<&Account> = accounts.iter().collect();
        let mut output = Vec::new();

        let result = write_accounts_csv(&refs, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, expected_output);
    }
}
