use techdeck_domain::catalog::{CatalogSettings, SectorColor, TechnologyMetadata};
use techdeck_domain::theme::{BrandShades, ColorToken, IconHandle, Theme};
use techdeck_kernel::Catalog;

/// Small catalog with three sectors, one of which ("Heat") has no technologies.
#[must_use]
pub fn sample_settings() -> CatalogSettings {
    let mut settings = CatalogSettings {
        sectors: vec![
            SectorColor::new("Electricity", "yellow"),
            SectorColor::new("Heat", "red"),
            SectorColor::new("Transport", "teal"),
        ],
        default_color: ColorToken::from("gray"),
        ..CatalogSettings::default()
    };

    for (id, name, sector) in [
        ("solar", "Solar PV", "Electricity"),
        ("wind", "Onshore Wind", "Electricity"),
        ("ev", "Electric Vehicles", "Transport"),
        ("rail", "Electric Rail", "Transport"),
        ("hydrogen", "Hydrogen", "Industry"),
    ] {
        settings.technology_metadata.insert(id.to_owned(), TechnologyMetadata::new(name, sector));
    }

    settings.technology_images.insert("solar".to_owned(), "solar.jpg".to_owned());
    settings.technology_images.insert("wind".to_owned(), String::new());
    settings.icon_map.insert("solar".to_owned(), IconHandle::from("solar-panel"));
    settings.icon_map.insert("default".to_owned(), IconHandle::from("circle"));
    settings
}

#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_settings())
}

#[must_use]
pub fn sample_theme() -> Theme {
    let mut theme = Theme::default();
    theme.brand.insert(ColorToken::from("yellow"), BrandShades::new("#fff3b0", "#8a6d00"));
    theme.brand.insert(ColorToken::from("teal"), BrandShades::new("#b2f5ea", "#1d4044"));
    theme
}
