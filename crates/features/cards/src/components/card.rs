use crate::components::provider::use_deck;
use crate::glyph::{Glyph, icon_class};
use dioxus::prelude::*;
use techdeck_kernel::CardAppearance;
use techdeck_kernel::domain::card::CardFlags;
use techdeck_kernel::domain::constants::DEFAULT_COLS;
use techdeck_kernel::domain::theme::{ColorToken, IconHandle};

/// A single technology tile.
///
/// With `to` the tile is a link to that target, otherwise a plain block. Hover state is local
/// to the tile and only affects its own colors and opacity.
#[component]
pub fn TechnologyCard(
    title: String,
    color: ColorToken,
    icon: IconHandle,
    to: Option<String>,
    #[props(default)] selected: bool,
    #[props(default)] featured: bool,
    #[props(default)] changed: bool,
    #[props(default)] conventional: bool,
    #[props(default = DEFAULT_COLS)] cols: u8,
    /// Asset path of the background image.
    image: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let deck = use_deck();
    let mut hovered = use_signal(|| false);

    let flags = CardFlags::from_state(selected, featured, changed, conventional, hovered());
    let style = CardAppearance::builder()
        .theme(deck.theme())
        .color(&color)
        .flags(flags)
        .cols(cols)
        .image(image.as_deref())
        .build()
        .style();

    let container_css = style.container_css();
    let header_css = style.header_css();
    let title_css = style.title_css();
    let marker_css = style.marker_css();
    let square_css = style.square_css();
    let folder_class = Glyph::Folder.class();
    let marker_class = Glyph::StarOfLife.class();
    let square_class = Glyph::Square.class();
    let indicator_class = icon_class(&icon);

    let body = rsx! {
        div { class: "tech-card__header", style: "{header_css}",
            span { class: "tech-card__title", style: "{title_css}", "{title}" }
            if style.show_folder {
                i { class: "tech-card__folder {folder_class}" }
            }
            if style.show_changed_marker {
                i { class: "tech-card__marker {marker_class}", style: "{marker_css}" }
            }
        }
        if style.show_indicator {
            div { class: "tech-card__body",
                div { class: "tech-card__indicator",
                    i { class: "tech-card__square {square_class}", style: "{square_css}" }
                    i { class: "tech-card__icon {indicator_class}" }
                }
            }
        }
    };

    let handle_click = move |evt: MouseEvent| {
        if let Some(handler) = onclick {
            handler.call(evt);
        }
    };

    match to {
        Some(href) => rsx! {
            a {
                class: "tech-card tech-card--link",
                href: "{href}",
                style: "{container_css}",
                onclick: handle_click,
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),
                {body}
            }
        },
        None => rsx! {
            div {
                class: "tech-card",
                style: "{container_css}",
                onclick: handle_click,
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),
                {body}
            }
        },
    }
}
