//! I/O module
//!
//! Handles the persisted dataset and the account listing output.
//!
//! # Components
//!
//! - `json_file` - The JSON dataset file read at startup and overwritten on exit
//! - `memory` - In-memory dataset storage for tests and benchmarks
//! - `csv_format` - CSV rendering of the account listing

pub mod csv_format;
pub mod json_file;
pub mod memory;

pub use csv_format::write_accounts_csv;
pub use json_file::{JsonFileStorage, DEFAULT_DATA_FILE};
pub use memory::MemoryStorage;
