// src/export/fonts.rs

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ui::canvas::FontRole;

/// Standard PDF fonts with Latin glyph sets. Every viewer ships these, so
/// nothing has to be embedded.
pub const STANDARD_FONTS: [&str; 12] = [
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
];

/// Used when a configured family is not one of `STANDARD_FONTS`.
pub const FALLBACK_FONT: &str = "Helvetica";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl FontSpec {
    fn new(family: &str, size: f32) -> Self {
        Self { family: family.to_string(), size }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSet {
    pub title: FontSpec,
    pub header: FontSpec,
    pub body: FontSpec,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            title: FontSpec::new("Times-Bold", 50.0),
            header: FontSpec::new("Times-Roman", 35.0),
            body: FontSpec::new("Times-Roman", 22.0),
        }
    }
}

impl FontSet {
    pub fn spec(&self, role: FontRole) -> &FontSpec {
        match role {
            FontRole::Title => &self.title,
            FontRole::Header => &self.header,
            FontRole::Body => &self.body,
        }
    }

    /// The font actually used for `role`: the configured family when it is a
    /// standard font, otherwise the fallback.
    pub fn resolve(&self, role: FontRole) -> ResolvedFont {
        let spec = self.spec(role);
        let base_font = match STANDARD_FONTS.iter().find(|f| **f == spec.family) {
            Some(found) => *found,
            None => {
                warn!(family = %spec.family, ?role, fallback = FALLBACK_FONT, "Preferred font unavailable, using default font.");
                FALLBACK_FONT
            }
        };
        let size = if spec.size > 0.0 { spec.size } else { 12.0 };
        ResolvedFont { base_font, size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFont {
    pub base_font: &'static str,
    pub size: f32,
}
