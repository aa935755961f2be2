//! Transaction sources for the home screen
//!
//! The screen never builds its own data. It asks a [`TransactionSource`] for
//! the grouping on every draw, so the built-in sample can be swapped for a
//! fixture file (or something real) without touching the views.

pub mod json;
pub mod sample;

pub use json::JsonFixture;
pub use sample::SampleData;

use std::path::Path;

use crate::error::WalletResult;
use crate::models::TransactionGroups;

/// Supplies the date-grouped transaction history
pub trait TransactionSource {
    /// Produce a fresh grouping. Must return the same value on every call
    /// unless the underlying data changed
    fn grouped(&self) -> TransactionGroups;

    /// Short name used in logs and `wallet config`
    fn name(&self) -> &str;
}

/// Pick the source for this run: a fixture file if one is given, the
/// built-in sample otherwise
pub fn open_source(fixture: Option<&Path>) -> WalletResult<Box<dyn TransactionSource>> {
    match fixture {
        Some(path) => {
            let source = JsonFixture::load(path)?;
            tracing::info!(
                path = %path.display(),
                groups = source.grouped().len(),
                "using fixture transaction source"
            );
            Ok(Box::new(source))
        }
        None => {
            tracing::info!("using built-in sample transactions");
            Ok(Box::new(SampleData))
        }
    }
}
