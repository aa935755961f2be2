//! Transaction display formatting
//!
//! Plain-text rendering of the grouped history for `wallet list`.

use crate::models::{Transaction, TransactionGroups};
use crate::tui::widgets::CURRENCY_SUFFIX;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "  {:20} {:15} {:>10} {}",
        truncate(&txn.merchant_name, 20),
        truncate(&txn.category, 15),
        txn.amount,
        CURRENCY_SUFFIX
    )
}

/// Format the whole grouping, one header per date label
pub fn format_transaction_groups(groups: &TransactionGroups) -> String {
    if groups.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for group in groups {
        output.push_str(&group.label);
        output.push('\n');
        output.push_str(&"-".repeat(55));
        output.push('\n');

        if group.transactions.is_empty() {
            output.push_str("  (no transactions)\n");
        }
        for txn in &group.transactions {
            output.push_str(&format_transaction_row(txn));
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{SampleData, TransactionSource};
    use crate::models::{Amount, Glyph};

    #[test]
    fn test_row_keeps_amount_literal() {
        let txn = Transaction::new(0, Glyph::Eye, "Merchant", "Category", Amount::signed(10_000));
        let row = format_transaction_row(&txn);
        assert!(row.ends_with("+10.000 eTHB"));
        assert!(row.starts_with("  Merchant"));
    }

    #[test]
    fn test_groups_in_order() {
        let text = format_transaction_groups(&SampleData.grouped());
        let today = text.find("Today").unwrap();
        let jan15 = text.find("January 15, Sat").unwrap();
        let jan1 = text.find("January 1, Tue").unwrap();
        assert!(today < jan15 && jan15 < jan1);
        assert_eq!(text.matches("eTHB").count(), 9);
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            format_transaction_groups(&TransactionGroups::new()),
            "No transactions found.\n"
        );

        let mut groups = TransactionGroups::new();
        groups.insert("Today", Vec::new());
        assert!(format_transaction_groups(&groups).contains("(no transactions)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long merchant", 6), "a lon…");
    }
}
