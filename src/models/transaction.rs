//! Transaction model and date-grouped history
//!
//! A `Transaction` is a display record: nothing on the home screen does
//! arithmetic with it. `TransactionGroups` keeps date labels in the order
//! they were inserted; that order is the order sections appear on screen.

use serde::{Deserialize, Serialize};

use super::amount::{Amount, Polarity};
use super::glyph::Glyph;

/// A single transaction row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Record identifier. Not unique and not used as a key
    #[serde(default)]
    pub id: u32,

    /// Leading icon
    pub icon: Glyph,

    /// Merchant shown on the headline
    pub merchant_name: String,

    /// Category shown on the supporting line
    pub category: String,

    /// Signed amount; its display string is what the row shows
    pub amount: Amount,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: u32,
        icon: Glyph,
        merchant_name: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            id,
            icon,
            merchant_name: merchant_name.into(),
            category: category.into(),
            amount,
        }
    }

    /// Polarity of the amount, which decides the row color
    pub fn polarity(&self) -> Polarity {
        self.amount.polarity()
    }
}

/// One section of the history: a date label and its transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    /// Section header text, e.g. "Today"
    pub label: String,
    /// Transactions in display order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Insertion-ordered mapping from date label to transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DateGroup>", into = "Vec<DateGroup>")]
pub struct TransactionGroups {
    groups: Vec<DateGroup>,
}

impl TransactionGroups {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group at the end, or replace the transactions of an
    /// existing label without moving it
    pub fn insert(&mut self, label: impl Into<String>, transactions: Vec<Transaction>) {
        let label = label.into();
        if let Some(existing) = self.groups.iter_mut().find(|g| g.label == label) {
            existing.transactions = transactions;
        } else {
            self.groups.push(DateGroup {
                label,
                transactions,
            });
        }
    }

    /// Get the transactions for a label
    pub fn get(&self, label: &str) -> Option<&[Transaction]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.transactions.as_slice())
    }

    /// Iterate over groups in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, DateGroup> {
        self.groups.iter()
    }

    /// Labels in insertion order
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of transactions across all groups
    pub fn transaction_count(&self) -> usize {
        self.groups.iter().map(|g| g.transactions.len()).sum()
    }
}

impl From<Vec<DateGroup>> for TransactionGroups {
    fn from(groups: Vec<DateGroup>) -> Self {
        groups
            .into_iter()
            .map(|g| (g.label, g.transactions))
            .collect()
    }
}

impl From<TransactionGroups> for Vec<DateGroup> {
    fn from(groups: TransactionGroups) -> Self {
        groups.groups
    }
}

impl<L: Into<String>> FromIterator<(L, Vec<Transaction>)> for TransactionGroups {
    fn from_iter<I: IntoIterator<Item = (L, Vec<Transaction>)>>(iter: I) -> Self {
        let mut groups = Self::new();
        for (label, transactions) in iter {
            groups.insert(label, transactions);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a TransactionGroups {
    type Item = &'a DateGroup;
    type IntoIter = std::slice::Iter<'a, DateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(amount: i64) -> Transaction {
        Transaction::new(0, Glyph::Eye, "Merchant", "Category", Amount::new(amount))
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let groups: TransactionGroups = vec![
            ("Today", vec![txn(1)]),
            ("January 15, Sat", vec![txn(2)]),
            ("January 1, Tue", vec![txn(3)]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            groups.labels(),
            vec!["Today", "January 15, Sat", "January 1, Tue"]
        );
    }

    #[test]
    fn test_duplicate_label_replaces_in_place() {
        let mut groups = TransactionGroups::new();
        groups.insert("A", vec![txn(1)]);
        groups.insert("B", vec![txn(2)]);
        groups.insert("A", vec![txn(3), txn(4)]);

        assert_eq!(groups.labels(), vec!["A", "B"]);
        assert_eq!(groups.get("A").unwrap().len(), 2);
        assert_eq!(groups.transaction_count(), 3);
    }

    #[test]
    fn test_get_missing_label() {
        let groups = TransactionGroups::new();
        assert!(groups.get("Today").is_none());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_polarity_follows_amount() {
        assert_eq!(txn(-1).polarity(), Polarity::Debit);
        assert_eq!(txn(100).polarity(), Polarity::Credit);
    }

    #[test]
    fn test_json_shape() {
        let mut groups = TransactionGroups::new();
        groups.insert(
            "Today",
            vec![Transaction::new(
                7,
                Glyph::QrCode,
                "Shop",
                "Food",
                Amount::signed(10_000),
            )],
        );

        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(json[0]["label"], "Today");
        assert_eq!(json[0]["transactions"][0]["amount"], "+10.000");
        assert_eq!(json[0]["transactions"][0]["icon"], "qr_code");

        let back: TransactionGroups = serde_json::from_value(json).unwrap();
        assert_eq!(back, groups);
    }

    #[test]
    fn test_json_duplicate_labels_merge() {
        let json = r#"[
            {"label": "A", "transactions": []},
            {"label": "B", "transactions": []},
            {"label": "A", "transactions": [
                {"icon": "eye", "merchant_name": "M", "category": "C", "amount": "-100"}
            ]}
        ]"#;

        let groups: TransactionGroups = serde_json::from_str(json).unwrap();
        assert_eq!(groups.labels(), vec!["A", "B"]);
        assert_eq!(groups.get("A").unwrap()[0].amount, Amount::new(-100));
        assert_eq!(groups.get("A").unwrap()[0].id, 0);
    }
}
