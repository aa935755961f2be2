//! JSON fixture files as a transaction source
//!
//! A fixture is an array of `{ "label", "transactions" }` objects. It is read
//! and validated once; every `grouped()` call hands out a clone.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{WalletError, WalletResult};
use crate::models::TransactionGroups;

use super::TransactionSource;

/// Transactions loaded from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFixture {
    path: PathBuf,
    groups: TransactionGroups,
}

impl JsonFixture {
    /// Read and validate a fixture file
    pub fn load(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let file = File::open(path)
            .map_err(|e| WalletError::fixture(&shown, format!("failed to open: {}", e)))?;

        let groups: TransactionGroups = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| WalletError::fixture(&shown, format!("failed to parse: {}", e)))?;

        validate(&groups).map_err(|reason| WalletError::fixture(&shown, reason))?;

        tracing::debug!(
            path = %shown,
            groups = groups.len(),
            transactions = groups.transaction_count(),
            "loaded fixture"
        );

        Ok(Self {
            path: path.to_path_buf(),
            groups,
        })
    }

    /// File this fixture was read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Labels must be non-blank; they are the only section identity
fn validate(groups: &TransactionGroups) -> Result<(), String> {
    if let Some(position) = groups.iter().position(|g| g.label.trim().is_empty()) {
        return Err(format!("group {} has an empty label", position + 1));
    }
    Ok(())
}

impl TransactionSource for JsonFixture {
    fn grouped(&self) -> TransactionGroups {
        self.groups.clone()
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
