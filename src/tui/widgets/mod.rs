//! Reusable TUI widgets

pub mod grouped_list;
pub mod transaction_row;

pub use grouped_list::{entries, Entry, GroupedList, GroupedListState};
pub use transaction_row::{TransactionRow, CURRENCY_SUFFIX, ROW_HEIGHT};
