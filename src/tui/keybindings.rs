//! Keybinding definitions
//!
//! Maps keys to what they do on the home screen: quit, scroll the history,
//! or activate one of the (inert) controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Control;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ScrollTop,
    ScrollBottom,
    Activate(Control),
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Bound action
    pub action: KeyAction,
}

const fn bind(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    action: KeyAction,
) -> Keybinding {
    Keybinding {
        key,
        modifiers,
        description,
        action,
    }
}

const fn bind_control(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    control: Control,
) -> Keybinding {
    bind(key, modifiers, description, KeyAction::Activate(control))
}

const NONE: KeyModifiers = KeyModifiers::NONE;
const SHIFT: KeyModifiers = KeyModifiers::SHIFT;

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    bind(KeyCode::Char('q'), NONE, "Quit", KeyAction::Quit),
    bind(KeyCode::Esc, NONE, "Quit", KeyAction::Quit),
    bind(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit", KeyAction::Quit),
    bind(KeyCode::Char('j'), NONE, "Scroll down", KeyAction::ScrollDown),
    bind(KeyCode::Down, NONE, "Scroll down", KeyAction::ScrollDown),
    bind(KeyCode::Char('k'), NONE, "Scroll up", KeyAction::ScrollUp),
    bind(KeyCode::Up, NONE, "Scroll up", KeyAction::ScrollUp),
    bind(KeyCode::PageDown, NONE, "Page down", KeyAction::PageDown),
    bind(KeyCode::PageUp, NONE, "Page up", KeyAction::PageUp),
    bind(KeyCode::Char('g'), NONE, "Top of list", KeyAction::ScrollTop),
    bind(KeyCode::Home, NONE, "Top of list", KeyAction::ScrollTop),
    bind(KeyCode::Char('G'), SHIFT, "Bottom of list", KeyAction::ScrollBottom),
    bind(KeyCode::End, NONE, "Bottom of list", KeyAction::ScrollBottom),
    bind_control(KeyCode::Char('a'), NONE, "Account", Control::Account),
    bind_control(KeyCode::Char('?'), NONE, "Support", Control::Support),
    bind_control(KeyCode::Char('h'), NONE, "Hide balance", Control::ToggleBalance),
    bind_control(KeyCode::Char('c'), NONE, "Category filter", Control::FilterCategory),
    bind_control(KeyCode::Char('s'), NONE, "Status filter", Control::FilterStatus),
    bind_control(KeyCode::Char('d'), NONE, "Date filter", Control::FilterDate),
    bind_control(KeyCode::Char('S'), SHIFT, "Settings", Control::Settings),
    bind_control(KeyCode::Char('n'), NONE, "Send", Control::Send),
    bind_control(KeyCode::Char('l'), NONE, "Location", Control::Location),
];

/// Look up the action for a key event
///
/// SHIFT is ignored for character keys because terminals disagree on
/// whether they report it alongside an uppercase char.
pub fn action_for(key: &KeyEvent) -> Option<KeyAction> {
    let strip_shift = |m: KeyModifiers| match key.code {
        KeyCode::Char(_) => m.difference(KeyModifiers::SHIFT),
        _ => m,
    };
    let modifiers = strip_shift(key.modifiers);

    KEYBINDINGS
        .iter()
        .find(|b| b.key == key.code && strip_shift(b.modifiers) == modifiers)
        .map(|b| b.action)
}

/// Key that activates `control`
pub fn key_for(control: Control) -> Option<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .find(|b| b.action == KeyAction::Activate(control))
}
