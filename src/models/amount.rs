//! Amount type for transaction and balance figures
//!
//! Stores a signed whole-unit value and renders it with grouped thousands
//! ("1.000", "10,000"). Whether a positive amount prints a leading `+` is part
//! of the value, so "+10.000" and "100" both survive a parse/format cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when an amount is displayed without an explicit one
pub const DEFAULT_GROUP_SEPARATOR: char = '.';

/// Direction of money movement, derived from the sign of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Money leaving the wallet (negative amount)
    Debit,
    /// Money entering the wallet (zero or positive amount)
    Credit,
}

/// A signed amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount {
    value: i64,
    explicit_sign: bool,
}

impl Amount {
    /// Create an amount that prints without a `+` when positive
    ///
    /// # Examples
    /// ```
    /// use digital_wallet::models::Amount;
    /// assert_eq!(Amount::new(-1000).to_string(), "-1.000");
    /// ```
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            explicit_sign: false,
        }
    }

    /// Create an amount that always prints its sign
    ///
    /// # Examples
    /// ```
    /// use digital_wallet::models::Amount;
    /// assert_eq!(Amount::signed(10_000).to_string(), "+10.000");
    /// ```
    pub const fn signed(value: i64) -> Self {
        Self {
            value,
            explicit_sign: value >= 0,
        }
    }

    /// Get the raw value
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Whether a positive amount prints a leading `+`
    pub const fn has_explicit_sign(&self) -> bool {
        self.explicit_sign
    }

    /// Polarity of this amount; zero counts as a credit
    pub const fn polarity(&self) -> Polarity {
        if self.is_negative() {
            Polarity::Debit
        } else {
            Polarity::Credit
        }
    }

    /// Format with the given thousands separator
    pub fn format(&self, separator: char) -> String {
        let digits = self.value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.is_negative() {
            out.push('-');
        } else if self.explicit_sign {
            out.push('+');
        }

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(ch);
        }

        out
    }

    /// Parse an amount grouped with [`DEFAULT_GROUP_SEPARATOR`]
    ///
    /// Accepts only the form [`Display`](fmt::Display) produces, so the
    /// parsed amount prints back as the same text: "100", "-100", "+10.000",
    /// "1.000". Ungrouped runs of four or more digits, leading zeros, `-0`
    /// and surrounding whitespace are rejected.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        Self::parse_grouped(s, DEFAULT_GROUP_SEPARATOR)
    }

    /// Parse an amount grouped with `separator`
    pub fn parse_grouped(s: &str, separator: char) -> Result<Self, AmountParseError> {
        let invalid = || AmountParseError::InvalidFormat(s.to_string());

        let (negative, explicit, body) = if let Some(rest) = s.strip_prefix('-') {
            (true, false, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, true, rest)
        } else {
            (false, false, s)
        };

        if body.trim().is_empty() {
            return Err(AmountParseError::Empty);
        }

        let groups: Vec<&str> = body.split(separator).collect();
        for (i, group) in groups.iter().enumerate() {
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            // Leading group 1-3 digits without a leading zero, the rest exactly 3
            let well_formed = match i {
                0 if *group == "0" => groups.len() == 1,
                0 => group.len() <= 3 && !group.starts_with('0'),
                _ => group.len() == 3,
            };
            if !well_formed {
                return Err(invalid());
            }
        }

        let magnitude: i64 = groups.concat().parse().map_err(|_| invalid())?;
        if negative && magnitude == 0 {
            return Err(invalid());
        }

        Ok(Self {
            value: if negative { -magnitude } else { magnitude },
            explicit_sign: explicit,
        })
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format(DEFAULT_GROUP_SEPARATOR))
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_literals() {
        assert_eq!(Amount::new(-1000).to_string(), "-1.000");
        assert_eq!(Amount::signed(10_000).to_string(), "+10.000");
        assert_eq!(Amount::new(-100).to_string(), "-100");
        assert_eq!(Amount::new(100).to_string(), "100");
        assert_eq!(Amount::new(0).to_string(), "0");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>8}", Amount::new(-100)), "    -100");
    }

    #[test]
    fn test_format_with_separator() {
        assert_eq!(Amount::new(10_000).format(','), "10,000");
        assert_eq!(Amount::new(1_234_567).format(','), "1,234,567");
        assert_eq!(Amount::new(-999).format(','), "-999");
    }

    #[test]
    fn test_signed_negative_has_no_plus() {
        let amount = Amount::signed(-5);
        assert!(!amount.has_explicit_sign());
        assert_eq!(amount.to_string(), "-5");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("-1.000").unwrap(), Amount::new(-1000));
        assert_eq!(Amount::parse("+10.000").unwrap(), Amount::signed(10_000));
        assert_eq!(Amount::parse("100").unwrap(), Amount::new(100));
        assert_eq!(Amount::parse("2.500").unwrap(), Amount::new(2500));
        assert_eq!(Amount::parse_grouped("10,000", ',').unwrap(), Amount::new(10_000));
    }

    #[test]
    fn test_parse_preserves_literal() {
        for literal in ["-1.000", "+10.000", "-100", "100", "+0", "12.345.678"] {
            assert_eq!(Amount::parse(literal).unwrap().to_string(), literal);
        }
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::parse("-"), Err(AmountParseError::Empty));
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("1.00").is_err());
        assert!(Amount::parse("1234.000").is_err());
        assert!(Amount::parse("1..000").is_err());
        assert!(Amount::parse("+-1").is_err());
        assert!(Amount::parse("99.999.999.999.999.999.999").is_err());
    }

    #[test]
    fn test_parse_rejects_text_that_would_reprint_differently() {
        for literal in [
            "1000", "+1000", "-2500", "007", "00", "-0", "0.100", "012.000", " 100", "100 ",
        ] {
            assert!(
                Amount::parse(literal).is_err(),
                "{:?} should be rejected",
                literal
            );
        }
    }

    #[test]
    fn test_polarity() {
        assert_eq!(Amount::new(-1).polarity(), Polarity::Debit);
        assert_eq!(Amount::new(0).polarity(), Polarity::Credit);
        assert_eq!(Amount::signed(10).polarity(), Polarity::Credit);
    }

    #[test]
    fn test_serde_uses_display_string() {
        let json = serde_json::to_string(&Amount::signed(10_000)).unwrap();
        assert_eq!(json, "\"+10.000\"");

        let parsed: Amount = serde_json::from_str("\"-1.000\"").unwrap();
        assert_eq!(parsed, Amount::new(-1000));

        assert!(serde_json::from_str::<Amount>("\"ten\"").is_err());
    }
}
