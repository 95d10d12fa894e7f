//! Identifier resolution against the catalog tables.

use crate::error::KernelError;
use std::sync::Arc;
use techdeck_domain::catalog::{CatalogSettings, TechnologyMetadata};
use techdeck_domain::constants::{DEFAULT_IMAGE_BASE, DEFAULT_KEY};
use techdeck_domain::theme::{ColorToken, IconHandle};
use tracing::debug;

/// Everything a card needs to know about one technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTechnology {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub color: ColorToken,
    pub icon: IconHandle,
    /// Asset path of the background image, if the technology has one.
    pub image: Option<String>,
}

/// Read-only view over [`CatalogSettings`] with the fallback rules applied.
///
/// Cloning is cheap: the tables are shared behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct Catalog {
    settings: Arc<CatalogSettings>,
    image_base: Arc<str>,
}

impl Catalog {
    #[must_use]
    pub fn new(settings: CatalogSettings) -> Self {
        Self::with_image_base(settings, DEFAULT_IMAGE_BASE)
    }

    #[must_use]
    pub fn with_image_base(settings: CatalogSettings, image_base: impl AsRef<str>) -> Self {
        Self { settings: Arc::new(settings), image_base: Arc::from(image_base.as_ref()) }
    }

    #[must_use]
    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Metadata of a technology.
    ///
    /// # Errors
    /// Returns [`KernelError::UnknownTechnology`] when `id` is not in the metadata table.
    pub fn metadata(&self, id: &str) -> Result<&TechnologyMetadata, KernelError> {
        self.settings
            .technology_metadata
            .get(id)
            .ok_or_else(|| KernelError::unknown_technology(id))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.settings.technology_metadata.contains_key(id)
    }

    /// Color token of a sector, or the catalog's default color.
    #[must_use]
    pub fn sector_color(&self, sector: &str) -> ColorToken {
        self.settings.sectors.iter().find(|row| row.name == sector).map_or_else(
            || {
                debug!(sector, "Sector has no color, using default");
                self.settings.default_color.clone()
            },
            |row| row.color.clone(),
        )
    }

    /// Icon of a technology, falling back to the `"default"` entry of the icon table and
    /// finally to the `"default"` sentinel itself.
    #[must_use]
    pub fn icon(&self, id: &str) -> IconHandle {
        let icons = &self.settings.icon_map;
        icons.get(id).or_else(|| icons.get(DEFAULT_KEY)).cloned().unwrap_or_default()
    }

    /// Asset path of a technology's background image, relative when the image base is empty.
    #[must_use]
    pub fn image(&self, id: &str) -> Option<String> {
        self.settings
            .technology_images
            .get(id)
            .filter(|file| !file.is_empty())
            .map(|file| {
                if self.image_base.is_empty() {
                    file.clone()
                } else {
                    format!("{}/{file}", self.image_base.trim_end_matches('/'))
                }
            })
    }

    /// Sector names in heading order.
    pub fn sector_names(&self) -> impl Iterator<Item = &str> {
        self.settings.sectors.iter().map(|row| row.name.as_str())
    }

    /// Resolves an identifier into display data.
    ///
    /// # Errors
    /// Returns [`KernelError::UnknownTechnology`] when `id` is not in the metadata table.
    pub fn resolve(&self, id: &str) -> Result<ResolvedTechnology, KernelError> {
        let meta = self.metadata(id)?;
        Ok(ResolvedTechnology {
            id: id.to_owned(),
            name: meta.name.clone(),
            sector: meta.sector.clone(),
            color: self.sector_color(&meta.sector),
            icon: self.icon(id),
            image: self.image(id),
        })
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.settings, &other.settings) && self.image_base == other.image_base
    }
}
