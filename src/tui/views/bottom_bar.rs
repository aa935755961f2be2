//! Bottom action bar
//!
//! A rounded card holding settings, send and location icons spread across
//! the row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Widget},
};

use crate::actions::Control;
use crate::models::Glyph;
use crate::tui::layout::{middle_row, space_between};
use crate::tui::theme;

/// Controls on the card, left to right
pub const BAR_CONTROLS: [Control; 3] = [Control::Settings, Control::Send, Control::Location];

fn control_line(control: Control) -> Line<'static> {
    match control {
        Control::Send => Line::from(vec![
            Span::styled(Glyph::QrCode.symbol(), Style::default().fg(theme::ACCENT)),
            Span::raw(" send"),
        ]),
        Control::Settings => {
            Line::styled(Glyph::Settings.symbol(), Style::default().fg(theme::MUTED))
        }
        Control::Location => {
            Line::styled(Glyph::Location.symbol(), Style::default().fg(theme::MUTED))
        }
        _ => Line::default(),
    }
}

/// Render the bottom card
pub fn render(area: Rect, buf: &mut Buffer) {
    let card = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .padding(Padding::horizontal(1));
    let inner = card.inner(area);
    card.render(area, buf);

    let lines: Vec<Line> = BAR_CONTROLS.iter().map(|c| control_line(*c)).collect();
    let widths: Vec<u16> = lines
        .iter()
        .map(|l| u16::try_from(l.width()).unwrap_or(u16::MAX))
        .collect();

    for (line, slot) in lines.into_iter().zip(space_between(middle_row(inner), &widths)) {
        line.render(slot, buf);
    }
}
