//! TUI Views module
//!
//! One view per home screen region, composed by [`HomeScreen`].

pub mod balance;
pub mod bottom_bar;
pub mod history;
pub mod toolbar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::StatefulWidget,
    Frame,
};

use super::app::App;
use super::layout::HomeLayout;
use super::widgets::GroupedListState;
use crate::models::TransactionGroups;

/// The whole home screen: toolbar, balance, history, bottom bar
pub struct HomeScreen<'a> {
    groups: &'a TransactionGroups,
}

impl<'a> HomeScreen<'a> {
    pub fn new(groups: &'a TransactionGroups) -> Self {
        Self { groups }
    }
}

impl StatefulWidget for HomeScreen<'_> {
    type State = GroupedListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let layout = HomeLayout::new(area);

        toolbar::render(layout.toolbar, buf);
        balance::render(layout.balance, buf);
        history::render(layout.history, buf, self.groups, state);
        bottom_bar::render(layout.bottom_bar, buf);
    }
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let groups = app.source.grouped();
    frame.render_stateful_widget(HomeScreen::new(&groups), frame.area(), &mut app.list);
}
