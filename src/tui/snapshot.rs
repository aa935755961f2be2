//! Off-terminal rendering
//!
//! Draws the home screen into a plain [`Buffer`] so it can be printed by
//! `wallet snapshot` or inspected in tests.

use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

use super::views::HomeScreen;
use super::widgets::GroupedListState;
use crate::fixtures::TransactionSource;

/// Render the home screen at the given size, scrolled to the top
pub fn render_to_buffer(source: &dyn TransactionSource, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let groups = source.grouped();

    HomeScreen::new(&groups).render(area, &mut buf, &mut GroupedListState::default());
    buf
}

/// Buffer rows as strings, trailing blanks removed
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let width = usize::from(buf.area.width).max(1);
    buf.content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Render the home screen as newline-separated text
pub fn render_text(source: &dyn TransactionSource, width: u16, height: u16) -> String {
    buffer_lines(&render_to_buffer(source, width, height)).join("\n")
}
