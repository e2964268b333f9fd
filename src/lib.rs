//! Material Theming Engine
//!
//! This library provides the two self-contained cores of a Material Design
//! theming tool: the onboarding wizard state machine and the design token
//! resolver that turns a named design style plus user overrides into CSS
//! custom properties.

pub mod cli;
pub mod color;
pub mod error;
pub mod fonts;
pub mod presets;
pub mod resolver;
pub mod wizard;

// Re-export main types for convenience
pub use color::{mix, parse_hex, Rgb};
pub use error::{Result, ThemeError};
pub use fonts::{google_fonts_url, FontCategory, FontLibrary};
pub use presets::{IconCollection, PresetRegistry, StyleOverrides, StyleTokens};
pub use resolver::{resolve, ResolvedTokenSet, ICON_FONT_VAR};
pub use wizard::{
    Addon, NoopEffects, WizardAction, WizardEffects, WizardFlow, WizardState, WizardStep,
};
