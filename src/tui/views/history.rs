//! Transaction history view
//!
//! Section title, the three filter chips and the grouped list. The chips are
//! drawn like buttons but filter nothing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use crate::actions::Control;
use crate::models::{Glyph, TransactionGroups};
use crate::tui::layout::{space_between, HistoryLayout};
use crate::tui::theme;
use crate::tui::widgets::{GroupedList, GroupedListState};

/// Title above the filters
pub const HISTORY_TITLE: &str = "Latest transaction";

/// Where a chip's icon sits relative to its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconSide {
    Leading,
    Trailing,
}

/// A filter chip
#[derive(Debug, Clone, Copy)]
pub struct FilterChip {
    pub control: Control,
    pub label: &'static str,
    icon: Glyph,
    side: IconSide,
}

/// Filter chips in display order
pub const FILTER_CHIPS: [FilterChip; 3] = [
    FilterChip {
        control: Control::FilterCategory,
        label: "Category",
        icon: Glyph::DropDown,
        side: IconSide::Trailing,
    },
    FilterChip {
        control: Control::FilterStatus,
        label: "Status",
        icon: Glyph::DropDown,
        side: IconSide::Trailing,
    },
    FilterChip {
        control: Control::FilterDate,
        label: "Date",
        icon: Glyph::DateRange,
        side: IconSide::Leading,
    },
];

impl FilterChip {
    fn line(&self) -> Line<'static> {
        let border = Style::default().fg(theme::BORDER);
        let icon = Span::styled(self.icon.symbol(), Style::default().fg(theme::ACCENT));
        let label = Span::raw(self.label);

        let inner = match self.side {
            IconSide::Leading => vec![icon, Span::raw(" "), label],
            IconSide::Trailing => vec![label, Span::raw(" "), icon],
        };

        let mut spans = vec![Span::styled("[ ", border)];
        spans.extend(inner);
        spans.push(Span::styled(" ]", border));
        Line::from(spans)
    }
}

/// Render the filter chip row
fn render_filters(area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = FILTER_CHIPS.iter().map(FilterChip::line).collect();
    let widths: Vec<u16> = lines
        .iter()
        .map(|l| u16::try_from(l.width()).unwrap_or(u16::MAX))
        .collect();

    for (line, slot) in lines.into_iter().zip(space_between(area, &widths)) {
        line.render(slot, buf);
    }
}

/// Render the history region
pub fn render(
    area: Rect,
    buf: &mut Buffer,
    groups: &TransactionGroups,
    state: &mut GroupedListState,
) {
    let layout = HistoryLayout::new(area);

    Line::styled(HISTORY_TITLE, theme::title()).render(layout.title, buf);
    render_filters(layout.filters, buf);
    GroupedList::new(groups).render(layout.list, buf, state);
}
