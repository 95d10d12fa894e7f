//! Facade crate for `TechDeck` features and shared modules.
//! Re-exports domain/kernel primitives and the card slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `techdeck` with the desired feature flags (`ui`/`ssr`).
//! - Build a [`kernel::Deck`] with [`deck_from_config`] and hand it to `cards::DeckProvider`.

pub use techdeck_domain as domain;
pub use techdeck_kernel as kernel;

#[cfg(feature = "ui")]
pub use techdeck_cards as cards;

use techdeck_domain::config::DeckConfig;
use techdeck_kernel::{Deck, Selection};

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "ui")]
        "ui",
        #[cfg(feature = "ssr")]
        "ssr",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds the render context and the initial portfolio selection from a loaded config.
#[must_use]
pub fn deck_from_config(config: &DeckConfig) -> (Deck, Selection) {
    let deck = Deck::from(config);
    let selection = Selection::from(&config.portfolio);
    tracing::info!(
        technologies = config.catalog.technology_metadata.len(),
        sectors = config.catalog.sectors.len(),
        selected = config.portfolio.selected.len(),
        "Deck initialized"
    );
    (deck, selection)
}

/// Every catalog identifier, grouped by sector order and sorted by name within a sector.
#[must_use]
pub fn catalog_ids(config: &DeckConfig) -> Vec<String> {
    let catalog = &config.catalog;
    let mut ids: Vec<&String> = catalog.technology_metadata.keys().collect();
    let sector_rank = |id: &String| {
        let sector = &catalog.technology_metadata[id].sector;
        catalog.sectors.iter().position(|row| &row.name == sector).unwrap_or(usize::MAX)
    };
    ids.sort_by(|a, b| {
        sector_rank(a)
            .cmp(&sector_rank(b))
            .then_with(|| catalog.technology_metadata[*a].name.cmp(&catalog.technology_metadata[*b].name))
    });
    ids.into_iter().cloned().collect()
}
