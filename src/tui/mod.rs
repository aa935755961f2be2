//! Terminal User Interface module
//!
//! Renders the wallet home screen with ratatui: toolbar, balance, grouped
//! transaction history and the bottom action bar.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout and styling
pub mod layout;
pub mod theme;

// Keybindings
pub mod keybindings;

// Off-terminal rendering
pub mod snapshot;

pub use app::App;
pub use terminal::run_tui;
pub use views::HomeScreen;
