//! Event handler for the TUI
//!
//! Routes keyboard and mouse events: quit, scroll the history list, or hand
//! a control to [`WalletActions`](crate::actions::WalletActions). Control
//! outcomes are logged and otherwise dropped; they never touch app state.

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use super::app::App;
use super::event::Event;
use super::keybindings::{action_for, KeyAction};

/// Lines moved per mouse wheel notch
const WHEEL_STEP: usize = 2;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => {}
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let Some(action) = action_for(&key) else {
        return;
    };

    match action {
        KeyAction::Quit => app.quit(),
        KeyAction::ScrollDown => app.list.scroll_down(1),
        KeyAction::ScrollUp => app.list.scroll_up(1),
        KeyAction::PageDown => app.list.page_down(),
        KeyAction::PageUp => app.list.page_up(),
        KeyAction::ScrollTop => app.list.scroll_to_top(),
        KeyAction::ScrollBottom => app.list.scroll_to_bottom(),
        KeyAction::Activate(control) => {
            let outcome = app.actions.activate(control);
            tracing::trace!(?outcome, "control dispatched");
        }
    }
}

/// Handle a mouse event; only the wheel does anything
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.list.scroll_down(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.list.scroll_up(WHEEL_STEP),
        _ => {}
    }
}
