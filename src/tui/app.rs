//! Application state for the TUI
//!
//! The home screen has almost no state: whether to quit and how far the
//! history list is scrolled. Data and control behavior are borrowed from
//! the caller.

use crate::actions::WalletActions;
use crate::fixtures::TransactionSource;

use super::widgets::GroupedListState;

/// Main application state
pub struct App<'a> {
    /// Where the transaction history comes from
    pub source: &'a dyn TransactionSource,

    /// Behavior behind the on-screen controls
    pub actions: &'a dyn WalletActions,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Scroll position of the history list
    pub list: GroupedListState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(source: &'a dyn TransactionSource, actions: &'a dyn WalletActions) -> Self {
        Self {
            source,
            actions,
            should_quit: false,
            list: GroupedListState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
