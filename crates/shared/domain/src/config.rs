use crate::catalog::CatalogSettings;
use crate::constants::{DEFAULT_COLS, DEFAULT_IMAGE_BASE, DEFAULT_MARGIN_BOTTOM};
use crate::theme::Theme;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level deck configuration shared by the applications.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckConfigInner {
    pub catalog: CatalogSettings,
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub portfolio: PortfolioConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct DeckConfig {
    #[serde(flatten, default)]
    inner: Arc<DeckConfigInner>,
}

impl DeckConfig {
    #[must_use]
    pub fn new(inner: DeckConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for DeckConfig {
    type Target = DeckConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DeckConfig {
    fn deref_mut(&mut self) -> &mut DeckConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Grid layout knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub cols: u8,
    pub margin_bottom: String,
    /// Prefix joined with the file names of `technology_images`.
    pub image_base: String,
}

/// Initial portfolio shown by the applications.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub selected: Vec<String>,
    pub featured: Vec<String>,
}

// --- Default ---

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            margin_bottom: DEFAULT_MARGIN_BOTTOM.to_owned(),
            image_base: DEFAULT_IMAGE_BASE.to_owned(),
        }
    }
}
