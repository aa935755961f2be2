//! Controls on the home screen and what they do
//!
//! None of the controls are wired to behavior yet. Each one still has a named
//! entry point on [`WalletActions`] so key handling can dispatch to it, and
//! [`InertActions`] answers every call with [`ActionOutcome::NotWired`].

use std::fmt;

/// Every interactive element on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Account icon in the toolbar
    Account,
    /// Support icon and label in the toolbar
    Support,
    /// Eye icon above the balance
    ToggleBalance,
    /// "Category" filter chip
    FilterCategory,
    /// "Status" filter chip
    FilterStatus,
    /// "Date" filter chip
    FilterDate,
    /// Settings icon in the bottom bar
    Settings,
    /// Send icon in the bottom bar
    Send,
    /// Location icon in the bottom bar
    Location,
}

impl Control {
    /// All controls, in screen order
    pub const ALL: [Control; 9] = [
        Control::Account,
        Control::Support,
        Control::ToggleBalance,
        Control::FilterCategory,
        Control::FilterStatus,
        Control::FilterDate,
        Control::Settings,
        Control::Send,
        Control::Location,
    ];

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Support => "Support",
            Self::ToggleBalance => "Hide balance",
            Self::FilterCategory => "Category filter",
            Self::FilterStatus => "Status filter",
            Self::FilterDate => "Date filter",
            Self::Settings => "Settings",
            Self::Send => "Send",
            Self::Location => "Location",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of activating a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The control exists on screen but has no behavior behind it
    NotWired(Control),
}

/// Capabilities behind the home screen controls
pub trait WalletActions {
    fn open_account(&self) -> ActionOutcome;
    fn open_support(&self) -> ActionOutcome;
    fn toggle_balance_visibility(&self) -> ActionOutcome;
    fn filter_by_category(&self) -> ActionOutcome;
    fn filter_by_status(&self) -> ActionOutcome;
    fn filter_by_date(&self) -> ActionOutcome;
    fn open_settings(&self) -> ActionOutcome;
    fn send(&self) -> ActionOutcome;
    fn open_location(&self) -> ActionOutcome;

    /// Route a control to its capability
    fn activate(&self, control: Control) -> ActionOutcome {
        match control {
            Control::Account => self.open_account(),
            Control::Support => self.open_support(),
            Control::ToggleBalance => self.toggle_balance_visibility(),
            Control::FilterCategory => self.filter_by_category(),
            Control::FilterStatus => self.filter_by_status(),
            Control::FilterDate => self.filter_by_date(),
            Control::Settings => self.open_settings(),
            Control::Send => self.send(),
            Control::Location => self.open_location(),
        }
    }
}

/// The mockup's implementation: every control is a logged no-op
#[derive(Debug, Clone, Copy, Default)]
pub struct InertActions;

impl InertActions {
    fn not_wired(control: Control) -> ActionOutcome {
        tracing::debug!(control = %control, "control activated but not wired");
        ActionOutcome::NotWired(control)
    }
}

impl WalletActions for InertActions {
    fn open_account(&self) -> ActionOutcome {
        Self::not_wired(Control::Account)
    }

    fn open_support(&self) -> ActionOutcome {
        Self::not_wired(Control::Support)
    }

    fn toggle_balance_visibility(&self) -> ActionOutcome {
        Self::not_wired(Control::ToggleBalance)
    }

    fn filter_by_category(&self) -> ActionOutcome {
        Self::not_wired(Control::FilterCategory)
    }

    fn filter_by_status(&self) -> ActionOutcome {
        Self::not_wired(Control::FilterStatus)
    }

    fn filter_by_date(&self) -> ActionOutcome {
        Self::not_wired(Control::FilterDate)
    }

    fn open_settings(&self) -> ActionOutcome {
        Self::not_wired(Control::Settings)
    }

    fn send(&self) -> ActionOutcome {
        Self::not_wired(Control::Send)
    }

    fn open_location(&self) -> ActionOutcome {
        Self::not_wired(Control::Location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_control_is_not_wired() {
        for control in Control::ALL {
            assert_eq!(
                InertActions.activate(control),
                ActionOutcome::NotWired(control)
            );
        }
    }

    #[test]
    fn test_control_display() {
        assert_eq!(Control::ToggleBalance.to_string(), "Hide balance");
        assert_eq!(Control::Send.to_string(), "Send");
    }
}
