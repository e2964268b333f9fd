//! Onboarding wizard state machine
//!
//! A pure reducer drives the wizard: UI events become [`WizardAction`]s,
//! the reducer returns the next [`WizardState`], and rendering belongs to
//! the caller. The only side effects live behind the [`WizardEffects`]
//! collaborator trait, invoked from the `Submit` action; the reducer never
//! performs installation or navigation itself.
//!
//! The reducer is total: out-of-range navigation and submit are no-ops on
//! the returned state, and no action can produce a step outside the
//! configured sequence.

pub mod state;

pub use state::{Addon, WizardState, WizardStep};

use strum::IntoEnumIterator;
use tracing::debug;

/// Discrete wizard actions dispatched by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Advance to the next step; no-op on the last step
    NextStep,
    /// Return to the previous step; no-op with empty history
    PreviousStep,
    /// Select or deselect an addon
    ToggleAddon(Addon),
    /// Dispatch installation of the selected addons
    Submit,
}

/// External collaborators triggered on `Submit`.
///
/// Calls are fire-and-forget with independent success/failure handling; a
/// failure in one collaborator must not block or roll back another. Retry
/// policy belongs to the implementor, not the reducer.
pub trait WizardEffects {
    /// Activate the Material theme addon.
    fn activate_theme(&self);

    /// Import the demo content layouts.
    fn import_demo_content(&self);

    /// Redirect to the settings screen when nothing was selected.
    fn redirect_to_settings(&self);
}

/// Effects sink that ignores every collaborator call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEffects;

impl WizardEffects for NoopEffects {
    fn activate_theme(&self) {}
    fn import_demo_content(&self) {}
    fn redirect_to_settings(&self) {}
}

/// The externally configured, ordered step sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardFlow {
    steps: Vec<WizardStep>,
}

impl Default for WizardFlow {
    fn default() -> Self {
        Self {
            steps: WizardStep::iter().collect(),
        }
    }
}

impl WizardFlow {
    /// Create a flow over a custom step sequence.
    pub fn new(steps: Vec<WizardStep>) -> Self {
        Self { steps }
    }

    /// The configured step sequence.
    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    /// Fresh state at the first step with nothing selected.
    pub fn initial_state(&self) -> WizardState {
        WizardState {
            active: self.steps.first().copied().unwrap_or(WizardStep::Addons),
            history: Vec::new(),
            addons: Vec::new(),
        }
    }

    fn position(&self, step: WizardStep) -> Option<usize> {
        self.steps.iter().position(|s| *s == step)
    }

    /// Reduce an action into the next wizard state.
    ///
    /// Navigation and toggling are pure; `Submit` dispatches to the
    /// effects collaborator and returns the state unchanged.
    pub fn reduce(
        &self,
        state: &WizardState,
        action: &WizardAction,
        effects: &dyn WizardEffects,
    ) -> WizardState {
        match action {
            WizardAction::NextStep => self.next_step(state),
            WizardAction::PreviousStep => self.previous_step(state),
            WizardAction::ToggleAddon(addon) => toggle_addon(state, *addon),
            WizardAction::Submit => {
                submit(state, effects);
                state.clone()
            }
        }
    }

    fn next_step(&self, state: &WizardState) -> WizardState {
        let Some(index) = self.position(state.active) else {
            return state.clone();
        };

        // Stepping forward past the last step is a no-op.
        if index + 1 == self.steps.len() {
            return state.clone();
        }

        let mut next = state.clone();
        next.history.insert(0, state.active);
        next.active = self.steps[index + 1];
        next
    }

    fn previous_step(&self, state: &WizardState) -> WizardState {
        // Nothing visited yet: stepping backward is a no-op.
        if state.history.is_empty() {
            return state.clone();
        }

        let Some(index) = self.position(state.active) else {
            return state.clone();
        };
        if index == 0 {
            return state.clone();
        }

        let destination = self.steps[index - 1];
        let mut prev = state.clone();

        if index == 1 {
            prev.history.clear();
        } else {
            // The step becoming active again leaves the history, keeping
            // the invariant that history never holds the active step.
            prev.history.retain(|step| *step != destination);
        }

        prev.active = destination;
        prev
    }
}

fn toggle_addon(state: &WizardState, addon: Addon) -> WizardState {
    let mut next = state.clone();

    if let Some(index) = next.addons.iter().position(|a| *a == addon) {
        next.addons.remove(index);
    } else {
        next.addons.insert(0, addon);
    }

    next
}

fn submit(state: &WizardState, effects: &dyn WizardEffects) {
    if state.addons.is_empty() {
        debug!("wizard submitted with no addons, redirecting to settings");
        effects.redirect_to_settings();
        return;
    }

    for addon in &state.addons {
        debug!(addon = %addon, "dispatching addon installation");
        match addon {
            Addon::Theme => effects.activate_theme(),
            Addon::Demo => effects.import_demo_content(),
        }
    }
}
