//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::actions::WalletActions;
use crate::config::Settings;
use crate::fixtures::TransactionSource;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    tracing::debug!("terminal initialized");
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    tracing::debug!("terminal restored");
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(
    source: &dyn TransactionSource,
    actions: &dyn WalletActions,
    settings: &Settings,
) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(source, actions);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(1)));

    tracing::info!(source = source.name(), "home screen started");

    let result = event_loop(&mut terminal, &mut app, &events);
    let result = settle(result, restore_terminal());
    tracing::info!("home screen closed");

    result
}

/// Combine the loop result with the restore result, keeping the loop error
fn settle(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            tracing::error!(error = %restore_err, "failed to restore terminal");
            Err(e)
        }
        (result, restored) => result.and(restored),
    }
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?);

        if app.should_quit {
            return Ok(());
        }
    }
}
