//! Scrollable history list with sticky date headers
//!
//! The grouping is flattened into lines: one header line per group followed
//! by two lines per transaction. The list scrolls by line. Whatever group owns
//! the top visible line has its header drawn over that line, so the current
//! section label stays pinned while its rows scroll underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Clear, StatefulWidget, Widget},
};

use super::transaction_row::{TransactionRow, ROW_HEIGHT};
use crate::models::{Transaction, TransactionGroups};
use crate::tui::theme;

/// One element of the flattened list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// Section header
    Header(&'a str),
    /// Transaction row
    Row(&'a Transaction),
}

impl Entry<'_> {
    /// Lines this entry occupies
    pub fn height(&self) -> u16 {
        match self {
            Entry::Header(_) => 1,
            Entry::Row(_) => ROW_HEIGHT,
        }
    }
}

/// Flatten groups into header/row entries, in mapping order
pub fn entries(groups: &TransactionGroups) -> Vec<Entry<'_>> {
    let mut out = Vec::with_capacity(groups.len() + groups.transaction_count());
    for group in groups {
        out.push(Entry::Header(group.label.as_str()));
        out.extend(group.transactions.iter().map(Entry::Row));
    }
    out
}

/// A single screen line of the list
#[derive(Debug, Clone, Copy)]
struct ListLine<'a> {
    /// Label of the owning group
    section: &'a str,
    kind: LineKind<'a>,
}

#[derive(Debug, Clone, Copy)]
enum LineKind<'a> {
    Header,
    Headline(&'a Transaction),
    Supporting(&'a Transaction),
}

/// Expand entries into screen lines, one per line of [`Entry::height`]
fn flatten<'a>(entries: &[Entry<'a>]) -> Vec<ListLine<'a>> {
    let mut lines = Vec::new();
    let mut section = "";
    for entry in entries {
        match *entry {
            Entry::Header(label) => {
                section = label;
                lines.push(ListLine {
                    section,
                    kind: LineKind::Header,
                });
            }
            Entry::Row(txn) => {
                lines.push(ListLine {
                    section,
                    kind: LineKind::Headline(txn),
                });
                lines.push(ListLine {
                    section,
                    kind: LineKind::Supporting(txn),
                });
            }
        }
    }
    lines
}

/// Scroll position of the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupedListState {
    offset: usize,
    viewport: usize,
    content: usize,
}

impl GroupedListState {
    /// First visible line
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Lines visible at the last render
    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.content.saturating_sub(self.viewport)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
        self.clamp();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}

/// The grouped transaction list
pub struct GroupedList<'a> {
    groups: &'a TransactionGroups,
}

impl<'a> GroupedList<'a> {
    pub fn new(groups: &'a TransactionGroups) -> Self {
        Self { groups }
    }
}

fn render_header(label: &str, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    Line::styled(label, theme::section_header()).render(area, buf);
}

impl StatefulWidget for GroupedList<'_> {
    type State = GroupedListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let lines = flatten(&entries(self.groups));

        state.viewport = usize::from(area.height);
        state.content = lines.len();
        state.clamp();

        if area.is_empty() {
            return;
        }

        for (i, line) in lines
            .iter()
            .skip(state.offset)
            .take(state.viewport)
            .enumerate()
        {
            let row = Rect::new(area.x, area.y + i as u16, area.width, 1);
            match line.kind {
                LineKind::Header => render_header(line.section, row, buf),
                LineKind::Headline(txn) => TransactionRow::new(txn).render_headline(row, buf),
                LineKind::Supporting(txn) => TransactionRow::new(txn).render_supporting(row, buf),
            }
        }

        // Pin the header of the group owning the top line
        if let Some(top) = lines.get(state.offset) {
            if !matches!(top.kind, LineKind::Header) {
                let row = Rect::new(area.x, area.y, area.width, 1);
                render_header(top.section, row, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{SampleData, TransactionSource};
    use crate::tui::snapshot::buffer_lines;

    fn render(
        groups: &TransactionGroups,
        height: u16,
        state: &mut GroupedListState,
    ) -> Vec<String> {
        let area = Rect::new(0, 0, 30, height);
        let mut buf = Buffer::empty(area);
        GroupedList::new(groups).render(area, &mut buf, state);
        buffer_lines(&buf)
    }

    #[test]
    fn test_entries_follow_mapping_order() {
        let groups = SampleData.grouped();
        let entries = entries(&groups);

        let headers: Vec<&str> = entries
            .iter()
            .filter_map(|e| match e {
                Entry::Header(label) => Some(*label),
                Entry::Row(_) => None,
            })
            .collect();
        assert_eq!(headers, vec!["Today", "January 15, Sat", "January 1, Tue"]);

        let kinds: String = entries
            .iter()
            .map(|e| match e {
                Entry::Header(_) => 'H',
                Entry::Row(_) => 'r',
            })
            .collect();
        assert_eq!(kinds, "HrrrHrrrrHrr");
    }

    #[test]
    fn test_entry_heights() {
        let groups = SampleData.grouped();
        let entries = entries(&groups);
        let total: u16 = entries.iter().map(Entry::height).sum();
        assert_eq!(total, 3 + 9 * ROW_HEIGHT);
        assert_eq!(flatten(&entries).len(), usize::from(total));
    }

    #[test]
    fn test_lines_carry_owning_section() {
        let groups = SampleData.grouped();
        let lines = flatten(&entries(&groups));

        let sections: Vec<&str> = lines.iter().map(|l| l.section).collect();
        assert_eq!(sections[0], "Today");
        assert_eq!(sections[6], "Today");
        assert_eq!(sections[7], "January 15, Sat");
        assert_eq!(sections[lines.len() - 1], "January 1, Tue");
        assert!(matches!(lines[7].kind, LineKind::Header));
        assert!(matches!(lines[8].kind, LineKind::Headline(_)));
    }

    #[test]
    fn test_renders_from_top() {
        let groups = SampleData.grouped();
        let mut state = GroupedListState::default();
        let lines = render(&groups, 8, &mut state);

        assert_eq!(lines[0], "Today");
        assert!(lines[1].ends_with("-1.000 eTHB"));
        assert_eq!(lines[2], "    Category");
        assert!(lines[3].ends_with("+10.000 eTHB"));
        assert_eq!(lines[7], "January 15, Sat");
    }

    #[test]
    fn test_header_sticks_while_scrolling() {
        let groups = SampleData.grouped();
        let mut state = GroupedListState::default();
        render(&groups, 6, &mut state);

        // Line 8 is the first row of "January 15, Sat"
        state.scroll_down(8);
        let lines = render(&groups, 6, &mut state);

        assert_eq!(state.offset(), 8);
        assert_eq!(lines[0], "January 15, Sat");
        assert_eq!(lines[1], "    Category");
        assert!(lines[2].ends_with("-100 eTHB"));
    }

    #[test]
    fn test_header_line_at_top_is_not_duplicated() {
        let groups = SampleData.grouped();
        let mut state = GroupedListState::default();
        render(&groups, 6, &mut state);

        state.scroll_down(7);
        let lines = render(&groups, 6, &mut state);

        assert_eq!(lines[0], "January 15, Sat");
        assert!(lines[1].ends_with("-100 eTHB"));
    }

    #[test]
    fn test_offset_is_clamped() {
        let groups = SampleData.grouped();
        let mut state = GroupedListState::default();
        render(&groups, 10, &mut state);

        state.scroll_down(1_000);
        assert_eq!(state.offset(), 21 - 10);

        state.scroll_to_bottom();
        let lines = render(&groups, 10, &mut state);
        assert_eq!(lines[0], "January 15, Sat");
        assert_eq!(lines[5], "January 1, Tue");
        assert_eq!(lines[9], "    Category");

        state.page_up();
        assert_eq!(state.offset(), 1);
        state.scroll_to_top();
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_content_shorter_than_viewport() {
        let groups = SampleData.grouped();
        let mut state = GroupedListState::default();
        render(&groups, 40, &mut state);

        state.page_down();
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_empty_groups_render_nothing() {
        let groups = TransactionGroups::new();
        let mut state = GroupedListState::default();
        let lines = render(&groups, 4, &mut state);
        assert!(lines.iter().all(String::is_empty));
    }

    #[test]
    fn test_zero_height_area() {
        let groups = SampleData.grouped();
        let mut state = GroupedListState::default();
        let area = Rect::new(0, 0, 30, 0);
        let mut buf = Buffer::empty(area);
        GroupedList::new(&groups).render(area, &mut buf, &mut state);
        assert_eq!(state.viewport(), 0);
    }
}
