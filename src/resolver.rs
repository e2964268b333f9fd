//! Token resolution: design style + overrides -> CSS custom properties
//!
//! The resolver is a pure function over externally supplied configuration
//! (preset registry, font library). Re-invocation with the same inputs
//! yields the same output, so live previews can recompute on every
//! keystroke. An unknown style fails the whole call; a malformed color
//! value only suppresses that token's derived variables.

use tracing::{debug, warn};

use crate::color;
use crate::error::Result;
use crate::fonts::FontLibrary;
use crate::presets::{PresetRegistry, StyleOverrides, StyleTokens};

/// CSS variables sharing the head font choice.
const HEADLINE_FAMILY_VARS: [&str; 8] = [
    "--mdc-typography-headline1-font-family",
    "--mdc-typography-headline2-font-family",
    "--mdc-typography-headline3-font-family",
    "--mdc-typography-headline4-font-family",
    "--mdc-typography-headline5-font-family",
    "--mdc-typography-headline6-font-family",
    "--mdc-typography-subtitle1-font-family",
    "--mdc-typography-subtitle2-font-family",
];

/// CSS variables sharing the body font choice.
const BODY_FAMILY_VARS: [&str; 6] = [
    "--mdc-typography-font-family",
    "--mdc-typography-body1-font-family",
    "--mdc-typography-body2-font-family",
    "--mdc-typography-button-font-family",
    "--mdc-typography-caption-font-family",
    "--mdc-typography-overline-font-family",
];

/// Surface mix opacities and their variable names.
const SURFACE_MIXES: [(f32, &str); 2] = [
    (0.04, "--mdc-theme-surface-mix-4"),
    (0.12, "--mdc-theme-surface-mix-12"),
];

/// Icon font family variable.
pub const ICON_FONT_VAR: &str = "--mdc-icon-font-family";

/// Corner radius token bounds; overrides outside the range are clamped.
struct RadiusBounds {
    css_var: &'static str,
    min: i32,
    max: i32,
}

const BUTTON_RADIUS: RadiusBounds = RadiusBounds {
    css_var: "--mdc-button-radius",
    min: 0,
    max: 20,
};

const CARD_RADIUS: RadiusBounds = RadiusBounds {
    css_var: "--mdc-card-radius",
    min: 0,
    max: 24,
};

/// Final flat mapping of CSS variable names to values.
///
/// Insertion-ordered so the emitted stylesheet is deterministic. Never
/// persisted as an object; only the flattened CSS text leaves the crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTokenSet {
    vars: Vec<(String, String)>,
}

impl ResolvedTokenSet {
    fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.push((name.into(), value.into()));
    }

    /// Value of a variable, if resolved.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(var, _)| var == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate variables in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Flatten into a `:root` stylesheet block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.vars {
            css.push('\t');
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push('}');
        css
    }
}

/// Resolve a design style plus overrides into its final CSS variables.
///
/// Fails only on an unknown style name; the caller supplies the fallback
/// policy. Individual malformed token values degrade gracefully so a
/// partially typed custom value still renders a best-effort preview.
pub fn resolve(
    registry: &PresetRegistry,
    fonts: &FontLibrary,
    style: &str,
    overrides: &StyleOverrides,
) -> Result<ResolvedTokenSet> {
    let tokens = registry.require(style)?.merged(overrides);
    debug!(style, "resolving design tokens");

    let mut resolved = ResolvedTokenSet::default();
    emit_colors(&tokens, &mut resolved);
    emit_surface_mixes(&tokens, &mut resolved);
    emit_typography(&tokens, fonts, &mut resolved);
    emit_shapes(&tokens, &mut resolved);
    resolved.push(ICON_FONT_VAR, tokens.icon_collection.font_family());

    Ok(resolved)
}

/// Color tokens paired with their theme variable names, in emission order.
fn color_entries(tokens: &StyleTokens) -> [(&'static str, &str); 8] {
    [
        ("--mdc-theme-primary", tokens.primary_color.as_str()),
        ("--mdc-theme-on-primary", tokens.primary_text_color.as_str()),
        ("--mdc-theme-secondary", tokens.secondary_color.as_str()),
        ("--mdc-theme-on-secondary", tokens.secondary_text_color.as_str()),
        ("--mdc-theme-surface", tokens.surface_color.as_str()),
        ("--mdc-theme-on-surface", tokens.surface_text_color.as_str()),
        ("--mdc-theme-background", tokens.background_color.as_str()),
        ("--mdc-theme-on-background", tokens.background_text_color.as_str()),
    ]
}

fn emit_colors(tokens: &StyleTokens, out: &mut ResolvedTokenSet) {
    for (css_var, value) in color_entries(tokens) {
        // The raw value always passes through, well-formed or not.
        out.push(css_var, value);

        match color::parse_hex(value) {
            Some(rgb) => out.push(format!("{}-rgb", css_var), rgb.channels()),
            None => warn!(css_var, value, "malformed color value, skipping rgb variable"),
        }
    }
}

fn emit_surface_mixes(tokens: &StyleTokens, out: &mut ResolvedTokenSet) {
    // Both inputs must be well-formed; otherwise the mixes are skipped.
    let (Some(surface), Some(on_surface)) = (
        color::parse_hex(&tokens.surface_color),
        color::parse_hex(&tokens.surface_text_color),
    ) else {
        warn!("surface colors not both well-formed, skipping surface mixes");
        return;
    };

    for (alpha, css_var) in SURFACE_MIXES {
        out.push(css_var, color::mix(surface, on_surface, alpha).to_hex());
    }
}

fn emit_typography(tokens: &StyleTokens, fonts: &FontLibrary, out: &mut ResolvedTokenSet) {
    let head_stack = fonts.font_stack(&tokens.head_font_family);
    for css_var in HEADLINE_FAMILY_VARS {
        out.push(css_var, head_stack.clone());
    }

    let body_stack = fonts.font_stack(&tokens.body_font_family);
    for css_var in BODY_FAMILY_VARS {
        out.push(css_var, body_stack.clone());
    }
}

fn emit_shapes(tokens: &StyleTokens, out: &mut ResolvedTokenSet) {
    let radii = [
        (BUTTON_RADIUS, tokens.button_radius),
        (CARD_RADIUS, tokens.card_radius),
    ];

    for (bounds, value) in radii {
        let clamped = value.clamp(bounds.min, bounds.max);
        if clamped != value {
            debug!(css_var = bounds.css_var, value, clamped, "radius clamped to declared range");
        }
        out.push(bounds.css_var, format!("{}px", clamped));
    }
}
