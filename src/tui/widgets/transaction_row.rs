//! Single transaction row
//!
//! Two lines: icon, merchant and the colored amount on the first; the
//! category underneath, indented to the merchant name.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::Transaction;
use crate::tui::theme;

/// Currency code printed after every row amount
pub const CURRENCY_SUFFIX: &str = "eTHB";

/// Lines taken by one row
pub const ROW_HEIGHT: u16 = 2;

/// Columns before the merchant name: space, icon, two spaces
const TEXT_INDENT: usize = 4;

/// Renders one [`Transaction`]
pub struct TransactionRow<'a> {
    txn: &'a Transaction,
}

impl<'a> TransactionRow<'a> {
    pub fn new(txn: &'a Transaction) -> Self {
        Self { txn }
    }

    /// Render the first line into a one-row `area`
    pub fn render_headline(&self, area: Rect, buf: &mut Buffer) {
        let amount_style = Style::default().fg(theme::polarity_color(self.txn.polarity()));

        let trailing = Line::from(vec![
            Span::styled(self.txn.amount.to_string(), amount_style),
            Span::raw(" "),
            Span::styled(CURRENCY_SUFFIX, amount_style),
        ]);
        let trailing_width = u16::try_from(trailing.width()).unwrap_or(u16::MAX);

        let leading = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.txn.icon.symbol(), Style::default().fg(theme::MUTED)),
            Span::raw("  "),
            Span::raw(self.txn.merchant_name.as_str()),
        ]);
        let leading_area = Rect {
            width: area.width.saturating_sub(trailing_width.saturating_add(1)),
            ..area
        };

        leading.render(leading_area, buf);
        trailing.alignment(Alignment::Right).render(area, buf);
    }

    /// Render the second line into a one-row `area`
    pub fn render_supporting(&self, area: Rect, buf: &mut Buffer) {
        Line::from(vec![
            Span::raw(" ".repeat(TEXT_INDENT)),
            Span::styled(
                self.txn.category.as_str(),
                Style::default().fg(theme::MUTED),
            ),
        ])
        .render(area, buf);
    }
}

impl Widget for TransactionRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.render_headline(Rect { height: 1, ..area }, buf);
        if area.height > 1 {
            self.render_supporting(
                Rect {
                    y: area.y + 1,
                    height: 1,
                    ..area
                },
                buf,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Glyph};
    use crate::tui::snapshot::buffer_lines;
    use ratatui::style::Color;

    fn render(txn: &Transaction, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        TransactionRow::new(txn).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_row_text() {
        let txn = Transaction::new(0, Glyph::Eye, "Merchant", "Category", Amount::new(-1000));
        let buf = render(&txn, 30);
        let lines = buffer_lines(&buf);

        assert_eq!(lines[0], " ◎  Merchant       -1.000 eTHB");
        assert_eq!(lines[1], "    Category");
    }

    #[test]
    fn test_amount_color_follows_polarity() {
        let debit = Transaction::new(0, Glyph::Eye, "M", "C", Amount::new(-100));
        let credit = Transaction::new(0, Glyph::Eye, "M", "C", Amount::new(100));

        let buf = render(&debit, 20);
        assert_eq!(buf.content[19].fg, Color::Magenta);

        let buf = render(&credit, 20);
        assert_eq!(buf.content[19].fg, Color::Cyan);
    }

    #[test]
    fn test_narrow_row_keeps_amount() {
        let txn = Transaction::new(
            0,
            Glyph::Eye,
            "A very long merchant name",
            "Category",
            Amount::signed(10_000),
        );
        let buf = render(&txn, 20);
        let lines = buffer_lines(&buf);

        assert!(lines[0].ends_with("+10.000 eTHB"));
    }
}
