//! Toolbar view
//!
//! Account icon, app title and the support link, in three equal segments.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::Glyph;
use crate::tui::layout::{middle_row, ToolbarLayout};
use crate::tui::theme;

/// Title shown in the middle of the toolbar
pub const APP_TITLE: &str = "Digital Wallet";

/// Render the toolbar
pub fn render(area: Rect, buf: &mut Buffer) {
    let layout = ToolbarLayout::new(middle_row(area));

    Line::from(Glyph::Account.symbol()).render(layout.leading, buf);

    Line::styled(APP_TITLE, Style::default().fg(theme::MUTED))
        .alignment(Alignment::Center)
        .render(layout.center, buf);

    Line::from(vec![
        Span::raw(Glyph::Support.symbol()),
        Span::raw(" "),
        Span::styled(Glyph::Support.description(), Style::default().fg(theme::MUTED)),
    ])
    .alignment(Alignment::Right)
    .render(layout.trailing, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::snapshot::buffer_lines;

    #[test]
    fn test_toolbar_segments() {
        let area = Rect::new(0, 0, 48, 3);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf);
        let lines = buffer_lines(&buf);

        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("◉"));
        assert!(lines[1].contains("Digital Wallet"));
        assert!(lines[1].ends_with("◷ Support"));
    }
}
