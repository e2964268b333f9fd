//! Font metadata and the Google Fonts CDN URL builder
//!
//! The font library maps a family name to its generic CSS category so the
//! resolver can emit a complete font stack for every typography variable.
//! The table is external data: a compiled-in default covers the families
//! the built-in design styles use, and a JSON file can replace it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use strum::{Display, EnumIter, EnumString};

use crate::error::Result;

/// Generic CSS font category, used as the fallback in emitted font stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FontCategory {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

/// Font family name to category table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontLibrary {
    entries: BTreeMap<String, FontCategory>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        use FontCategory::*;

        let entries = [
            ("Roboto", SansSerif),
            ("Roboto Condensed", SansSerif),
            ("Roboto Mono", Monospace),
            ("Open Sans", SansSerif),
            ("Lato", SansSerif),
            ("Montserrat", SansSerif),
            ("Raleway", SansSerif),
            ("Rubik", SansSerif),
            ("Work Sans", SansSerif),
            ("Source Sans Pro", SansSerif),
            ("Libre Franklin", SansSerif),
            ("Merriweather", Serif),
            ("Playfair Display", Serif),
            ("Lora", Serif),
            ("PT Serif", Serif),
            ("Crimson Text", Serif),
            ("IBM Plex Mono", Monospace),
            ("Inconsolata", Monospace),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(name, category)| (name.to_string(), category))
                .collect(),
        }
    }
}

impl FontLibrary {
    /// Create an empty library (no known families; everything falls back).
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register or replace a family's category.
    pub fn insert(&mut self, family: impl Into<String>, category: FontCategory) {
        self.entries.insert(family.into(), category);
    }

    /// Generic fallback category for a family; sans-serif when unknown.
    pub fn fallback(&self, family: &str) -> FontCategory {
        self.entries.get(family).copied().unwrap_or_default()
    }

    /// Full CSS font stack for a family, e.g. `"Roboto", sans-serif`.
    pub fn font_stack(&self, family: &str) -> String {
        format!("\"{}\", {}", family, self.fallback(family))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a library from a JSON object of `"family": "category"` pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    /// Load a library from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Base URL for the Google Fonts CSS endpoint.
const FONTS_CDN_BASE: &str = "https://fonts.googleapis.com/css?family=";

/// Build the Google Fonts CDN URL for the given font families.
///
/// Material Icons is always requested; spaces are encoded as `+`,
/// duplicates are dropped, and families are joined with `|`.
pub fn google_fonts_url<'a, I>(families: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut encoded = vec!["Material+Icons".to_string()];

    for family in families {
        let name = family.trim().replace(' ', "+");
        if name.is_empty() || encoded.contains(&name) {
            continue;
        }
        encoded.push(name);
    }

    format!("{}{}", FONTS_CDN_BASE, encoded.join("|"))
}
