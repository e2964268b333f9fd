//! Property-Based Tests
//!
//! Uses proptest for testing invariants and edge cases
//!
//! These tests verify:
//! - Wizard reducer invariants under arbitrary action sequences
//! - Color parsing robustness on arbitrary input
//! - Token resolution invariants (clamping, derived variables)

use proptest::prelude::*;

use material_theme::{
    parse_hex, resolve, Addon, FontLibrary, NoopEffects, PresetRegistry, StyleOverrides,
    WizardAction, WizardFlow, WizardState,
};

// =============================================================================
// Wizard Reducer Property Tests
// =============================================================================

/// Strategy for generating wizard actions
fn action_strategy() -> impl Strategy<Value = WizardAction> {
    prop_oneof![
        Just(WizardAction::NextStep),
        Just(WizardAction::PreviousStep),
        Just(WizardAction::ToggleAddon(Addon::Theme)),
        Just(WizardAction::ToggleAddon(Addon::Demo)),
        Just(WizardAction::Submit),
    ]
}

/// Apply a sequence of actions from the initial state
fn run_actions(flow: &WizardFlow, actions: &[WizardAction]) -> WizardState {
    let mut state = flow.initial_state();
    for action in actions {
        state = flow.reduce(&state, action, &NoopEffects);
    }
    state
}

proptest! {
    /// The active step stays within the configured sequence under any
    /// action sequence, and the history never holds the active step.
    #[test]
    fn reducer_preserves_invariants(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let flow = WizardFlow::default();
        let mut state = flow.initial_state();

        for action in &actions {
            state = flow.reduce(&state, action, &NoopEffects);
            prop_assert!(flow.steps().contains(&state.active));
            prop_assert!(!state.history.contains(&state.active));
        }
    }

    /// Forward navigation never advances past the last step, and once
    /// there further NEXT_STEP actions leave the state untouched.
    #[test]
    fn next_step_saturates_at_last_step(extra in 0usize..8) {
        let flow = WizardFlow::default();
        let mut state = flow.initial_state();

        for _ in 0..flow.steps().len() + extra {
            state = flow.reduce(&state, &WizardAction::NextStep, &NoopEffects);
        }

        prop_assert_eq!(state.active, *flow.steps().last().unwrap());
        let again = flow.reduce(&state, &WizardAction::NextStep, &NoopEffects);
        prop_assert_eq!(again, state);
    }

    /// PREVIOUS_STEP undoes NEXT_STEP on any reachable non-terminal state.
    #[test]
    fn previous_inverts_next(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let flow = WizardFlow::default();
        let state = run_actions(&flow, &actions);

        let position = flow.steps().iter().position(|s| *s == state.active).unwrap();
        if position + 1 < flow.steps().len() {
            let forward = flow.reduce(&state, &WizardAction::NextStep, &NoopEffects);
            let back = flow.reduce(&forward, &WizardAction::PreviousStep, &NoopEffects);
            prop_assert_eq!(back, state);
        }
    }

    /// Toggling the same addon twice restores the selection exactly.
    #[test]
    fn toggle_addon_is_self_inverse(
        actions in prop::collection::vec(action_strategy(), 0..40),
        addon in prop_oneof![Just(Addon::Theme), Just(Addon::Demo)],
    ) {
        let flow = WizardFlow::default();
        let state = run_actions(&flow, &actions);

        let toggled = flow.reduce(&state, &WizardAction::ToggleAddon(addon), &NoopEffects);
        let restored = flow.reduce(&toggled, &WizardAction::ToggleAddon(addon), &NoopEffects);
        prop_assert_eq!(restored, state);
    }

    /// Addon selections stay unique under any action sequence.
    #[test]
    fn addon_selection_has_no_duplicates(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let flow = WizardFlow::default();
        let state = run_actions(&flow, &actions);

        let mut seen = state.addons.clone();
        seen.sort_by_key(|a| format!("{}", a));
        seen.dedup();
        prop_assert_eq!(seen.len(), state.addons.len());
    }
}

// =============================================================================
// Color Parsing Property Tests
// =============================================================================

proptest! {
    /// Arbitrary strings never panic the hex parser.
    #[test]
    fn parse_hex_doesnt_crash(s in ".*") {
        let _ = parse_hex(&s);
    }

    /// Every 6-digit hex string parses, with or without the prefix.
    #[test]
    fn six_digit_hex_always_parses(value in "[0-9a-fA-F]{6}") {
        prop_assert!(parse_hex(&value).is_some());
        prop_assert_eq!(parse_hex(&format!("#{}", value)), parse_hex(&value));
    }

    /// Channel decomposition round-trips through the hex encoding.
    #[test]
    fn hex_encoding_roundtrips(value in "[0-9a-f]{6}") {
        let rgb = parse_hex(&value).unwrap();
        prop_assert_eq!(parse_hex(&rgb.to_hex()), Some(rgb));
    }
}

// =============================================================================
// Resolver Property Tests
// =============================================================================

proptest! {
    /// Radius overrides always land inside the declared ranges.
    #[test]
    fn radius_overrides_are_always_clamped(button in any::<i32>(), card in any::<i32>()) {
        let overrides = StyleOverrides {
            button_radius: Some(button),
            card_radius: Some(card),
            ..Default::default()
        };
        let resolved = resolve(
            &PresetRegistry::default(),
            &FontLibrary::default(),
            "baseline",
            &overrides,
        )
        .unwrap();

        let button_px: i32 = resolved
            .get("--mdc-button-radius")
            .and_then(|v| v.strip_suffix("px"))
            .unwrap()
            .parse()
            .unwrap();
        prop_assert!((0..=20).contains(&button_px));

        let card_px: i32 = resolved
            .get("--mdc-card-radius")
            .and_then(|v| v.strip_suffix("px"))
            .unwrap()
            .parse()
            .unwrap();
        prop_assert!((0..=24).contains(&card_px));
    }

    /// A well-formed color override always yields its rgb companion; a
    /// malformed one never does, and the raw value survives either way.
    #[test]
    fn color_override_derivation_matches_validity(value in ".{0,12}") {
        let overrides = StyleOverrides {
            primary_color: Some(value.clone()),
            ..Default::default()
        };
        let resolved = resolve(
            &PresetRegistry::default(),
            &FontLibrary::default(),
            "baseline",
            &overrides,
        )
        .unwrap();

        prop_assert_eq!(resolved.get("--mdc-theme-primary"), Some(value.as_str()));
        prop_assert_eq!(
            resolved.get("--mdc-theme-primary-rgb").is_some(),
            parse_hex(&value).is_some()
        );
    }

    /// Resolution is deterministic for identical inputs.
    #[test]
    fn resolution_is_deterministic(value in "#[0-9a-f]{6}", radius in -50i32..100) {
        let overrides = StyleOverrides {
            secondary_color: Some(value),
            button_radius: Some(radius),
            ..Default::default()
        };
        let registry = PresetRegistry::default();
        let fonts = FontLibrary::default();

        let first = resolve(&registry, &fonts, "crane", &overrides).unwrap();
        let second = resolve(&registry, &fonts, "crane", &overrides).unwrap();
        prop_assert_eq!(first, second);
    }
}
