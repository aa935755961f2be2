//! Colors used across the home screen

use ratatui::style::{Color, Modifier, Style};

use crate::models::Polarity;

/// Accent for the currency code, send icon and dropdown arrows
pub const ACCENT: Color = Color::Cyan;

/// Secondary text and inactive icons
pub const MUTED: Color = Color::Gray;

/// Card and chip borders
pub const BORDER: Color = Color::DarkGray;

/// Color of an amount, decided by its sign
pub fn polarity_color(polarity: Polarity) -> Color {
    match polarity {
        Polarity::Debit => Color::Magenta,
        Polarity::Credit => Color::Cyan,
    }
}

/// Style for sticky section headers
pub fn section_header() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

/// Style for region titles such as "Latest transaction"
pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_colors_differ() {
        assert_eq!(polarity_color(Polarity::Debit), Color::Magenta);
        assert_eq!(polarity_color(Polarity::Credit), Color::Cyan);
    }
}
