//! Built-in demo transactions
//!
//! Three date sections: "Today" (3 rows), "January 15, Sat" (4 rows) and
//! "January 1, Tue" (2 rows). Every record uses id 0.

use crate::models::{Amount, Glyph, Transaction, TransactionGroups};

use super::TransactionSource;

/// The hardcoded demo history
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

fn row(icon: Glyph, amount: Amount) -> Transaction {
    Transaction::new(0, icon, "Merchant", "Category", amount)
}

impl TransactionSource for SampleData {
    fn grouped(&self) -> TransactionGroups {
        let mut groups = TransactionGroups::new();

        groups.insert(
            "Today",
            vec![
                row(Glyph::Eye, Amount::new(-1_000)),
                row(Glyph::Eye, Amount::signed(10_000)),
                row(Glyph::Eye, Amount::signed(10_000)),
            ],
        );

        groups.insert(
            "January 15, Sat",
            (0..4)
                .map(|_| row(Glyph::Settings, Amount::new(-100)))
                .collect(),
        );

        groups.insert(
            "January 1, Tue",
            vec![
                row(Glyph::QrCode, Amount::new(100)),
                row(Glyph::QrCode, Amount::new(100)),
            ],
        );

        groups
    }

    fn name(&self) -> &str {
        "sample"
    }
}
