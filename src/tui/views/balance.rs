//! Balance view
//!
//! The eye icon centered over "10,000 ETHB". Both figures are fixed; the
//! eye is a control with nothing behind it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::models::{Amount, Glyph};
use crate::tui::theme;

/// Displayed balance
pub const BALANCE: Amount = Amount::new(10_000);

/// Currency code next to the balance
pub const BALANCE_CURRENCY: &str = "ETHB";

/// Balance uses comma grouping
const BALANCE_SEPARATOR: char = ',';

/// Eye, spacer, amount
const CONTENT_HEIGHT: u16 = 3;

/// The balance line as displayed, e.g. "10,000 ETHB"
pub fn balance_text() -> String {
    format!("{} {}", BALANCE.format(BALANCE_SEPARATOR), BALANCE_CURRENCY)
}

/// Render the balance block, vertically centered
pub fn render(area: Rect, buf: &mut Buffer) {
    let top = area.y + area.height.saturating_sub(CONTENT_HEIGHT) / 2;
    let content = Rect::new(area.x, top, area.width, area.height.min(CONTENT_HEIGHT));

    let lines = vec![
        Line::from(Glyph::Eye.symbol()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                BALANCE.format(BALANCE_SEPARATOR),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(BALANCE_CURRENCY, Style::default().fg(theme::ACCENT)),
        ]),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(content, buf);
}
