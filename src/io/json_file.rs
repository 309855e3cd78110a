//! JSON dataset file
//!
//! The dataset is a single pretty-printed JSON array of account records:
//!
//! ```json
//! [
//!   {
//!     "Number": 100,
//!     "Balance": 500,
//!     "Owner": "Alice"
//!   }
//! ]
//! ```
//!
//! The file is always read whole and written whole. A missing file means
//! "no accounts yet"; anything that exists but does not parse as the array
//! above is a persistence error.

use crate::core::traits::DatasetStorage;
use crate::types::{Account, BankError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dataset file used when no path is configured
pub const DEFAULT_DATA_FILE: &str = "bank_data.json";

/// Dataset storage backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage for the JSON file at `path`
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    /// Path of the dataset file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl DatasetStorage for JsonFileStorage {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&self) -> Result<Option<Vec<Account>>, BankError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BankError::io(&self.path, e)),
        };

        let accounts: Vec<Account> =
            serde_json::from_str(&contents).map_err(|e| BankError::json(&self.path, e))?;

        debug!(path = %self.path.display(), records = accounts.len(), "dataset file parsed");
        Ok(Some(accounts))
    }

    fn write_all(&mut self, accounts: &[Account]) -> Result<(), BankError> {
        let mut contents =
            serde_json::to_string_pretty(accounts).map_err(|e| BankError::json(&self.path, e))?;
        contents.push('\n');

        fs::write(&self.path, contents).map_err(|e| BankError::io(&self.path, e))?;

        debug!(path = %self.path.display(), records = accounts.len(), "dataset file written");
        Ok(())
    }
}
