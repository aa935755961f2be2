//! Core data models for the wallet home screen
//!
//! Amounts, icon glyphs, transactions and their date grouping.

pub mod amount;
pub mod glyph;
pub mod transaction;

pub use amount::{Amount, AmountParseError, Polarity};
pub use glyph::Glyph;
pub use transaction::{DateGroup, Transaction, TransactionGroups};
