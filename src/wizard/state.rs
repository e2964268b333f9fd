//! Wizard state definitions
//!
//! Contains all state-related types for the onboarding wizard: the step
//! and addon identifiers and the reducer-owned `WizardState`.

use strum::{Display, EnumIter, EnumString};

/// Onboarding wizard steps, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum WizardStep {
    /// Choose which addons to install
    Addons,
    /// Apply the Material theme
    Theme,
    /// Import demo content
    Content,
    /// Wizard finished
    Done,
}

/// Installable addons offered by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Addon {
    /// The Material theme itself
    Theme,
    /// Demo content layouts
    Demo,
}

/// Reducer-owned wizard state.
///
/// `history` holds previously visited steps, most recent first, and backs
/// "back" navigation. `addons` preserves selection order with the newest
/// selection first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub active: WizardStep,
    pub history: Vec<WizardStep>,
    pub addons: Vec<Addon>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            active: WizardStep::Addons,
            history: Vec::new(),
            addons: Vec::new(),
        }
    }
}

impl WizardState {
    /// Whether an addon is currently selected.
    pub fn has_addon(&self, addon: Addon) -> bool {
        self.addons.contains(&addon)
    }
}
