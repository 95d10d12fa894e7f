use crate::theme::{ColorToken, IconHandle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static description of one technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyMetadata {
    pub name: String,
    pub sector: String,
}

impl TechnologyMetadata {
    pub fn new(name: impl Into<String>, sector: impl Into<String>) -> Self {
        Self { name: name.into(), sector: sector.into() }
    }
}

/// One row of the sector table. Row order is the heading order of sectioned grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorColor {
    pub name: String,
    pub color: ColorToken,
}

impl SectorColor {
    pub fn new(name: impl Into<String>, color: impl Into<ColorToken>) -> Self {
        Self { name: name.into(), color: color.into() }
    }
}

/// The technology catalog shared by every card on screen.
///
/// Identifiers are the keys of [`CatalogSettings::technology_metadata`]. Images and icons are
/// optional per identifier; the `"default"` key of `icon_map` is the icon fallback and
/// `default_color` is the sector fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub technology_metadata: HashMap<String, TechnologyMetadata>,
    pub technology_images: HashMap<String, String>,
    pub sectors: Vec<SectorColor>,
    pub default_color: ColorToken,
    pub icon_map: HashMap<String, IconHandle>,
}
