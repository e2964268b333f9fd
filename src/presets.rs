//! Design style presets and the override merge
//!
//! A design style is a named, fixed mapping of design tokens (colors,
//! typography, shape, icons) to defaults. The preset table is external
//! configuration: the compiled-in registry carries the four stock styles
//! and a JSON file authored by theme maintainers can replace it. User
//! overrides are merged on top with override-wins precedence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, ThemeError};

/// Material icon collection variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum IconCollection {
    #[default]
    Filled,
    Outlined,
    Round,
    TwoTone,
    Sharp,
}

impl IconCollection {
    /// Icon font family served by the Material Icons CDN.
    ///
    /// The filled collection uses the bare family name; every other
    /// variant appends its capitalized name.
    pub fn font_family(&self) -> &'static str {
        match self {
            Self::Filled => "Material Icons",
            Self::Outlined => "Material Icons Outlined",
            Self::Round => "Material Icons Round",
            Self::TwoTone => "Material Icons Two Tone",
            Self::Sharp => "Material Icons Sharp",
        }
    }
}

/// The complete token mapping of one design style.
///
/// Color values are raw strings rather than parsed colors: a user can be
/// mid-keystroke in a live preview, and a malformed value must still pass
/// through to its primary variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleTokens {
    pub primary_color: String,
    pub primary_text_color: String,
    pub secondary_color: String,
    pub secondary_text_color: String,
    pub surface_color: String,
    pub surface_text_color: String,
    pub background_color: String,
    pub background_text_color: String,
    pub head_font_family: String,
    pub body_font_family: String,
    pub button_radius: i32,
    pub card_radius: i32,
    #[serde(default)]
    pub icon_collection: IconCollection,
}

impl StyleTokens {
    /// Apply overrides on top of these defaults.
    ///
    /// Any token present in `overrides` replaces the preset value; absent
    /// tokens retain it.
    pub fn merged(&self, overrides: &StyleOverrides) -> StyleTokens {
        StyleTokens {
            primary_color: override_or(&overrides.primary_color, &self.primary_color),
            primary_text_color: override_or(&overrides.primary_text_color, &self.primary_text_color),
            secondary_color: override_or(&overrides.secondary_color, &self.secondary_color),
            secondary_text_color: override_or(
                &overrides.secondary_text_color,
                &self.secondary_text_color,
            ),
            surface_color: override_or(&overrides.surface_color, &self.surface_color),
            surface_text_color: override_or(&overrides.surface_text_color, &self.surface_text_color),
            background_color: override_or(&overrides.background_color, &self.background_color),
            background_text_color: override_or(
                &overrides.background_text_color,
                &self.background_text_color,
            ),
            head_font_family: override_or(&overrides.head_font_family, &self.head_font_family),
            body_font_family: override_or(&overrides.body_font_family, &self.body_font_family),
            button_radius: overrides.button_radius.unwrap_or(self.button_radius),
            card_radius: overrides.card_radius.unwrap_or(self.card_radius),
            icon_collection: overrides.icon_collection.unwrap_or(self.icon_collection),
        }
    }

    /// Selected font families, head first.
    pub fn font_families(&self) -> [&str; 2] {
        [
            self.head_font_family.as_str(),
            self.body_font_family.as_str(),
        ]
    }
}

fn override_or(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

/// Per-token user overrides; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub primary_color: Option<String>,
    pub primary_text_color: Option<String>,
    pub secondary_color: Option<String>,
    pub secondary_text_color: Option<String>,
    pub surface_color: Option<String>,
    pub surface_text_color: Option<String>,
    pub background_color: Option<String>,
    pub background_text_color: Option<String>,
    pub head_font_family: Option<String>,
    pub body_font_family: Option<String>,
    pub button_radius: Option<i32>,
    pub card_radius: Option<i32>,
    pub icon_collection: Option<IconCollection>,
}

impl StyleOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Color overrides as `(token, value)` pairs, for validation reports.
    pub fn color_fields(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("primary_color", self.primary_color.as_deref()),
            ("primary_text_color", self.primary_text_color.as_deref()),
            ("secondary_color", self.secondary_color.as_deref()),
            ("secondary_text_color", self.secondary_text_color.as_deref()),
            ("surface_color", self.surface_color.as_deref()),
            ("surface_text_color", self.surface_text_color.as_deref()),
            ("background_color", self.background_color.as_deref()),
            ("background_text_color", self.background_text_color.as_deref()),
        ]
    }

    /// Parse overrides from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load overrides from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Named design style table.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRegistry {
    presets: BTreeMap<String, StyleTokens>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("baseline", baseline());
        registry.register("crane", crane());
        registry.register("fortnightly", fortnightly());
        registry.register("blossom", blossom());
        registry
    }
}

impl PresetRegistry {
    /// Create a registry with no styles.
    pub fn empty() -> Self {
        Self {
            presets: BTreeMap::new(),
        }
    }

    /// Register or replace a style.
    pub fn register(&mut self, name: impl Into<String>, tokens: StyleTokens) {
        self.presets.insert(name.into(), tokens);
    }

    /// Look up a style by name.
    pub fn get(&self, name: &str) -> Option<&StyleTokens> {
        self.presets.get(name)
    }

    /// Look up a style by name, failing on unknown names.
    pub fn require(&self, name: &str) -> Result<&StyleTokens> {
        self.get(name)
            .ok_or_else(|| ThemeError::unknown_style(name))
    }

    /// Registered style names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Load a registry from a JSON object of `"name": { tokens }` pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self {
            presets: serde_json::from_str(json)?,
        })
    }

    /// Load a registry from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

// =============================================================================
// STOCK DESIGN STYLES
// =============================================================================

fn baseline() -> StyleTokens {
    StyleTokens {
        primary_color: "#6200ee".to_string(),
        primary_text_color: "#ffffff".to_string(),
        secondary_color: "#018786".to_string(),
        secondary_text_color: "#ffffff".to_string(),
        surface_color: "#ffffff".to_string(),
        surface_text_color: "#000000".to_string(),
        background_color: "#ffffff".to_string(),
        background_text_color: "#000000".to_string(),
        head_font_family: "Roboto".to_string(),
        body_font_family: "Roboto".to_string(),
        button_radius: 4,
        card_radius: 4,
        icon_collection: IconCollection::Filled,
    }
}

fn crane() -> StyleTokens {
    StyleTokens {
        primary_color: "#5d1049".to_string(),
        primary_text_color: "#ffffff".to_string(),
        secondary_color: "#e30425".to_string(),
        secondary_text_color: "#ffffff".to_string(),
        surface_color: "#ffffff".to_string(),
        surface_text_color: "#000000".to_string(),
        background_color: "#f4e0e6".to_string(),
        background_text_color: "#000000".to_string(),
        head_font_family: "Raleway".to_string(),
        body_font_family: "Raleway".to_string(),
        button_radius: 16,
        card_radius: 16,
        icon_collection: IconCollection::Outlined,
    }
}

fn fortnightly() -> StyleTokens {
    StyleTokens {
        primary_color: "#121212".to_string(),
        primary_text_color: "#ffffff".to_string(),
        secondary_color: "#6b38fb".to_string(),
        secondary_text_color: "#ffffff".to_string(),
        surface_color: "#ffffff".to_string(),
        surface_text_color: "#000000".to_string(),
        background_color: "#ffffff".to_string(),
        background_text_color: "#000000".to_string(),
        head_font_family: "Merriweather".to_string(),
        body_font_family: "Libre Franklin".to_string(),
        button_radius: 0,
        card_radius: 0,
        icon_collection: IconCollection::Sharp,
    }
}

fn blossom() -> StyleTokens {
    StyleTokens {
        primary_color: "#c2185b".to_string(),
        primary_text_color: "#ffffff".to_string(),
        secondary_color: "#f8bbd0".to_string(),
        secondary_text_color: "#442c2e".to_string(),
        surface_color: "#fffbfa".to_string(),
        surface_text_color: "#442c2e".to_string(),
        background_color: "#fffbfa".to_string(),
        background_text_color: "#442c2e".to_string(),
        head_font_family: "Playfair Display".to_string(),
        body_font_family: "Source Sans Pro".to_string(),
        button_radius: 20,
        card_radius: 24,
        icon_collection: IconCollection::Round,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_registry_has_stock_styles() {
        let registry = PresetRegistry::default();
        assert_eq!(registry.len(), 4);
        for name in ["baseline", "crane", "fortnightly", "blossom"] {
            assert!(registry.get(name).is_some(), "missing style {}", name);
        }
    }

    #[test]
    fn test_require_unknown_style_fails() {
        let registry = PresetRegistry::default();
        let err = registry.require("bauhaus").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownStyle(_)));
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let overrides = StyleOverrides {
            primary_color: Some("#ff0000".to_string()),
            button_radius: Some(8),
            ..Default::default()
        };
        let merged = baseline().merged(&overrides);

        assert_eq!(merged.primary_color, "#ff0000");
        assert_eq!(merged.button_radius, 8);
        // Untouched tokens retain preset defaults.
        assert_eq!(merged.secondary_color, "#018786");
        assert_eq!(merged.card_radius, 4);
    }

    #[test]
    fn test_empty_overrides_merge_to_identity() {
        let merged = baseline().merged(&StyleOverrides::default());
        assert_eq!(merged, baseline());
    }

    #[test]
    fn test_icon_font_families() {
        assert_eq!(IconCollection::Filled.font_family(), "Material Icons");
        assert_eq!(IconCollection::Outlined.font_family(), "Material Icons Outlined");
        assert_eq!(IconCollection::TwoTone.font_family(), "Material Icons Two Tone");
        assert_eq!(IconCollection::Sharp.font_family(), "Material Icons Sharp");
    }

    #[test]
    fn test_icon_collection_parsing() {
        use std::str::FromStr;
        assert_eq!(
            IconCollection::from_str("two-tone").unwrap(),
            IconCollection::TwoTone
        );
        assert!(IconCollection::from_str("chunky").is_err());
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides = StyleOverrides::from_json_str(
            r##"{"primary_color": "#3f51b5", "icon_collection": "sharp"}"##,
        )
        .unwrap();
        assert_eq!(overrides.primary_color.as_deref(), Some("#3f51b5"));
        assert_eq!(overrides.icon_collection, Some(IconCollection::Sharp));
        assert!(overrides.secondary_color.is_none());

        // Unknown token names are rejected rather than silently dropped.
        assert!(StyleOverrides::from_json_str(r##"{"primry_color": "#fff"}"##).is_err());
    }

    #[test]
    fn test_registry_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::json!({
            "minimal": {
                "primary_color": "#111111",
                "primary_text_color": "#ffffff",
                "secondary_color": "#222222",
                "secondary_text_color": "#ffffff",
                "surface_color": "#ffffff",
                "surface_text_color": "#111111",
                "background_color": "#ffffff",
                "background_text_color": "#111111",
                "head_font_family": "Lora",
                "body_font_family": "Open Sans",
                "button_radius": 2,
                "card_radius": 2
            }
        });
        write!(file, "{}", json).unwrap();

        let registry = PresetRegistry::from_json_file(file.path()).unwrap();
        assert_eq!(registry.len(), 1);

        let minimal = registry.require("minimal").unwrap();
        assert_eq!(minimal.head_font_family, "Lora");
        // Omitted icon_collection falls back to the filled default.
        assert_eq!(minimal.icon_collection, IconCollection::Filled);
    }
}
