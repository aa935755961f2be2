//! Display formatting for terminal output
//!
//! Plain-text output used by the non-interactive commands.

pub mod transaction;

pub use transaction::{format_transaction_groups, format_transaction_row};
