//! Interactive console
//!
//! The command dispatcher in front of the account store: it prints the menu,
//! collects arguments for each command, calls the store and reports the
//! outcome. It works over any `BufRead`/`Write` pair, so sessions can be
//! scripted in tests exactly as a user would type them.

mod menu;
mod session;

pub use menu::MenuChoice;
pub use session::{Console, SessionOutcome};
