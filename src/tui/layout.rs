//! Layout definitions for the TUI
//!
//! The home screen is four stacked regions weighted 1:2:4:1 inside a one-cell
//! padded frame: toolbar, balance, transaction history, bottom action bar.

use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};

/// Vertical weights of the four home screen regions
pub const REGION_WEIGHTS: [u16; 4] = [1, 2, 4, 1];

/// Layout regions for the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    /// Account icon, title, support
    pub toolbar: Rect,
    /// Eye icon and balance line
    pub balance: Rect,
    /// Title, filter chips and grouped list
    pub history: Rect,
    /// Settings / send / location card
    pub bottom_bar: Rect,
}

impl HomeLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });

        let chunks = Layout::vertical(REGION_WEIGHTS.map(Constraint::Fill)).split(inner);

        Self {
            toolbar: chunks[0],
            balance: chunks[1],
            history: chunks[2],
            bottom_bar: chunks[3],
        }
    }

    /// Regions in top-to-bottom order
    pub fn regions(&self) -> [Rect; 4] {
        [self.toolbar, self.balance, self.history, self.bottom_bar]
    }
}

/// Three equal-width toolbar segments
pub struct ToolbarLayout {
    pub leading: Rect,
    pub center: Rect,
    pub trailing: Rect,
}

impl ToolbarLayout {
    /// Split a single toolbar row into thirds
    pub fn new(row: Rect) -> Self {
        let chunks = Layout::horizontal([Constraint::Fill(1); 3]).split(row);

        Self {
            leading: chunks[0],
            center: chunks[1],
            trailing: chunks[2],
        }
    }
}

/// Layout for the transaction history region
pub struct HistoryLayout {
    /// "Latest transaction"
    pub title: Rect,
    /// Filter chip row
    pub filters: Rect,
    /// Grouped list
    pub list: Rect,
}

impl HistoryLayout {
    /// Calculate history layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Filters
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // List
        ])
        .split(area);

        Self {
            title: chunks[0],
            filters: chunks[2],
            list: chunks[4],
        }
    }
}

/// Spread fixed-width items across a row with equal gaps between them
pub fn space_between(row: Rect, widths: &[u16]) -> Vec<Rect> {
    Layout::horizontal(widths.iter().map(|w| Constraint::Length(*w)))
        .flex(Flex::SpaceBetween)
        .split(row)
        .to_vec()
}

/// The row in the vertical middle of `area`
pub fn middle_row(area: Rect) -> Rect {
    Rect::new(
        area.x,
        area.y + area.height.saturating_sub(1) / 2,
        area.width,
        area.height.min(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_are_ordered_and_weighted() {
        let layout = HomeLayout::new(Rect::new(0, 0, 60, 42));
        let [toolbar, balance, history, bottom] = layout.regions();

        assert_eq!(toolbar.y, 1);
        assert_eq!(balance.y, toolbar.bottom());
        assert_eq!(history.y, balance.bottom());
        assert_eq!(bottom.y, history.bottom());
        assert_eq!(bottom.bottom(), 41);

        assert_eq!(toolbar.height, 5);
        assert_eq!(balance.height, 10);
        assert_eq!(history.height, 20);
        assert_eq!(bottom.height, 5);
    }

    #[test]
    fn test_regions_are_padded() {
        let layout = HomeLayout::new(Rect::new(0, 0, 30, 20));
        for region in layout.regions() {
            assert_eq!(region.x, 1);
            assert_eq!(region.width, 28);
        }
    }

    #[test]
    fn test_tiny_area_keeps_order() {
        let layout = HomeLayout::new(Rect::new(0, 0, 4, 3));
        let regions = layout.regions();
        for pair in regions.windows(2) {
            assert!(pair[0].y <= pair[1].y);
        }
    }

    #[test]
    fn test_toolbar_thirds() {
        let toolbar = ToolbarLayout::new(Rect::new(0, 0, 30, 1));
        assert_eq!(toolbar.leading.width, 10);
        assert_eq!(toolbar.center.x, 10);
        assert_eq!(toolbar.trailing.right(), 30);
    }

    #[test]
    fn test_space_between_pins_ends() {
        let items = space_between(Rect::new(0, 0, 40, 1), &[5, 5, 5]);
        assert_eq!(items[0].x, 0);
        assert_eq!(items[2].right(), 40);
        assert!(items[1].x > items[0].right());
    }

    #[test]
    fn test_middle_row() {
        assert_eq!(middle_row(Rect::new(0, 4, 10, 5)).y, 6);
        assert_eq!(middle_row(Rect::new(0, 4, 10, 0)).height, 0);
    }
}
