use dioxus::dioxus_core::Properties;
use dioxus::prelude::*;
use techdeck_kernel::Catalog;
use techdeck_kernel::Deck;
use techdeck_kernel::domain::catalog::{CatalogSettings, SectorColor, TechnologyMetadata};
use techdeck_kernel::domain::config::LayoutConfig;
use techdeck_kernel::domain::theme::{BrandShades, ColorToken, IconHandle, Theme};

/// Deck with three sectors; "Heat" has no technologies.
#[must_use]
pub fn sample_deck() -> Deck {
    let mut settings = CatalogSettings {
        sectors: vec![
            SectorColor::new("Electricity", "yellow"),
            SectorColor::new("Heat", "red"),
            SectorColor::new("Transport", "teal"),
        ],
        ..CatalogSettings::default()
    };
    for (id, name, sector) in [
        ("solar", "Solar PV", "Electricity"),
        ("wind", "Onshore Wind", "Electricity"),
        ("ev", "Electric Vehicles", "Transport"),
    ] {
        settings.technology_metadata.insert(id.to_owned(), TechnologyMetadata::new(name, sector));
    }
    settings.technology_images.insert("solar".to_owned(), "solar.jpg".to_owned());
    settings.icon_map.insert("solar".to_owned(), IconHandle::from("solar-panel"));
    settings.icon_map.insert("default".to_owned(), IconHandle::from("circle"));

    let mut theme = Theme::default();
    theme.brand.insert(ColorToken::from("yellow"), BrandShades::new("#fff3b0", "#8a6d00"));
    theme.brand.insert(ColorToken::from("teal"), BrandShades::new("#b2f5ea", "#1d4044"));

    Deck::new(Catalog::new(settings), theme, LayoutConfig::default())
}

/// Renders `root` with `props` to an HTML string.
pub fn render<P: Properties>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
