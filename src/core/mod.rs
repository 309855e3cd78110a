//! Core business logic module
//!
//! This module contains the account store and the seam it persists through:
//! - `traits` - Trait abstraction for dataset storage
//! - `account_store` - Account ownership, operations, load and save

pub mod account_store;
pub mod traits;

pub use account_store::{AccountStore, LoadOutcome};
pub use traits::DatasetStorage;
