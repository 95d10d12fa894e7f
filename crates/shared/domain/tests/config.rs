use techdeck_domain::config::{DeckConfig, LayoutConfig};
use techdeck_domain::theme::{ColorToken, Shade};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let layout = LayoutConfig::default();
    assert_eq!(layout.cols, 3);
    assert_eq!(layout.margin_bottom, "3rem");
    assert_eq!(layout.image_base, "images/technology_images");

    let cfg = DeckConfig::default();
    assert!(cfg.catalog.sectors.is_empty());
    assert!(cfg.catalog.default_color.is_fallback());
    assert_eq!(cfg.theme.space_4, "1rem");
    assert!(cfg.portfolio.selected.is_empty());
}

#[test]
fn deck_config_deserializes() {
    let raw = json!({
        "catalog": {
            "technology_metadata": {
                "solar": { "name": "Solar PV", "sector": "Electricity" },
                "ev": { "name": "Electric Vehicles", "sector": "Transport" }
            },
            "technology_images": { "solar": "solar.jpg" },
            "sectors": [
                { "name": "Electricity", "color": "yellow" },
                { "name": "Transport", "color": "teal" }
            ],
            "default_color": "gray",
            "icon_map": { "solar": "solar-panel", "default": "circle" }
        },
        "theme": {
            "brand": { "yellow": { "200": "#fff3b0", "900": "#8a6d00" } }
        },
        "layout": { "cols": 4 },
        "portfolio": { "selected": ["solar"] }
    });

    let cfg: DeckConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.catalog.technology_metadata["ev"].sector, "Transport");
    assert_eq!(cfg.catalog.sectors[1].color, ColorToken::from("teal"));
    assert_eq!(cfg.catalog.default_color.as_str(), "gray");
    assert_eq!(cfg.layout.cols, 4);
    assert_eq!(cfg.layout.margin_bottom, "3rem");
    assert_eq!(cfg.theme.space_4, "1rem");
    assert_eq!(cfg.theme.shade(&ColorToken::from("yellow"), Shade::Dark), Some("#8a6d00"));
    assert_eq!(cfg.theme.shade(&ColorToken::from("teal"), Shade::Light), None);
    assert_eq!(cfg.portfolio.selected, vec!["solar".to_owned()]);
}

#[test]
fn cloned_config_is_copy_on_write() {
    let original = DeckConfig::default();
    let mut edited = original.clone();
    edited.layout.cols = 2;

    assert_eq!(original.layout.cols, 3);
    assert_eq!(edited.layout.cols, 2);
}
