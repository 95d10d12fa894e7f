use crate::catalog::Catalog;
use std::sync::Arc;
use techdeck_domain::config::{DeckConfig, LayoutConfig};
use techdeck_domain::theme::Theme;

/// The configuration context handed to card components.
///
/// Two decks compare equal only when they share the same underlying tables, which keeps
/// prop comparisons in the UI layer cheap.
#[derive(Debug, Clone)]
pub struct Deck {
    catalog: Catalog,
    theme: Arc<Theme>,
    layout: Arc<LayoutConfig>,
}

impl Deck {
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, layout: LayoutConfig) -> Self {
        Self { catalog, theme: Arc::new(theme), layout: Arc::new(layout) }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

impl From<&DeckConfig> for Deck {
    fn from(config: &DeckConfig) -> Self {
        let catalog = Catalog::with_image_base(config.catalog.clone(), &config.layout.image_base);
        Self::new(catalog, config.theme.clone(), config.layout.clone())
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.catalog == other.catalog
            && Arc::ptr_eq(&self.theme, &other.theme)
            && Arc::ptr_eq(&self.layout, &other.layout)
    }
}
