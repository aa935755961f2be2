//! Visual resources referenced by the home screen
//!
//! Every icon on screen is one of these glyphs. A glyph renders as a single
//! terminal cell and carries the accessible description shown next to it
//! where the screen has room.

use serde::{Deserialize, Serialize};

/// An icon resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// Person silhouette (account)
    Account,
    /// Clock face (support)
    Support,
    /// Eye (balance visibility)
    Eye,
    /// Calendar (date filter)
    DateRange,
    /// Downward chevron on filter chips
    DropDown,
    /// Gear
    Settings,
    /// QR code (send)
    QrCode,
    /// Map pin
    Location,
}

impl Glyph {
    /// All glyphs, in declaration order
    pub const ALL: [Glyph; 8] = [
        Glyph::Account,
        Glyph::Support,
        Glyph::Eye,
        Glyph::DateRange,
        Glyph::DropDown,
        Glyph::Settings,
        Glyph::QrCode,
        Glyph::Location,
    ];

    /// Single-cell symbol drawn for this glyph
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Account => "◉",
            Self::Support => "◷",
            Self::Eye => "◎",
            Self::DateRange => "▦",
            Self::DropDown => "▾",
            Self::Settings => "✱",
            Self::QrCode => "▣",
            Self::Location => "⌖",
        }
    }

    /// Accessible description of the glyph
    pub fn description(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Support => "Support",
            Self::Eye => "Hide",
            Self::DateRange => "Date",
            Self::DropDown => "Expand",
            Self::Settings => "Settings",
            Self::QrCode => "Send",
            Self::Location => "Location",
        }
    }
}
