use crate::components::card::TechnologyCard;
use crate::components::provider::use_deck;
use dioxus::prelude::*;
use techdeck_kernel::{KernelErrorExt, ResolvedTechnology};
use tracing::warn;

/// Per-technology yes/no question asked by a grid (selected? featured? changed?).
pub type TechnologyPredicate = Callback<String, bool>;

/// Cards of the given technologies in a wrapping row layout.
///
/// Missing predicates answer `false`. Identifiers without metadata are logged and skipped.
#[component]
pub fn TechnologyCardGrid(
    technology_ids: Vec<String>,
    /// Cards per row, the deck layout's value when omitted.
    cols: Option<u8>,
    /// Space below the grid, the deck layout's value when omitted.
    mb: Option<String>,
    /// Prefix of the card keys.
    #[props(default)]
    key_string: String,
    on_select: Option<EventHandler<String>>,
    is_selected: Option<TechnologyPredicate>,
    is_featured: Option<TechnologyPredicate>,
    is_changed: Option<TechnologyPredicate>,
    /// Rendered in the grid ahead of the cards.
    prepend: Option<Element>,
) -> Element {
    let deck = use_deck();
    let cols = cols.unwrap_or(deck.layout().cols);
    let mb = mb.unwrap_or_else(|| deck.layout().margin_bottom.clone());
    let gap = deck.theme().space_4.clone();

    let entries: Vec<GridEntry> = technology_ids
        .iter()
        .filter_map(|id| {
            KernelErrorExt::context(deck.catalog().resolve(id), "technology card grid")
                .inspect_err(|err| warn!(%err, "Skipping card"))
                .ok()
        })
        .map(|tech| GridEntry {
            key: format!("{key_string}-{}", tech.id),
            selected: ask(is_selected, &tech.id),
            featured: ask(is_featured, &tech.id),
            changed: ask(is_changed, &tech.id),
            tech,
        })
        .collect();

    rsx! {
        div { class: "tech-grid", style: "gap: {gap}; margin-bottom: {mb};",
            {prepend}
            for entry in entries {
                TechnologyCard {
                    key: "{entry.key}",
                    title: entry.tech.name,
                    color: entry.tech.color,
                    icon: entry.tech.icon,
                    image: entry.tech.image,
                    cols,
                    selected: entry.selected,
                    featured: entry.featured,
                    changed: entry.changed,
                    onclick: {
                        let id = entry.tech.id;
                        move |_: MouseEvent| {
                            if let Some(handler) = on_select {
                                handler.call(id.clone());
                            }
                        }
                    },
                }
            }
        }
    }
}

struct GridEntry {
    key: String,
    tech: ResolvedTechnology,
    selected: bool,
    featured: bool,
    changed: bool,
}

fn ask(predicate: Option<TechnologyPredicate>, id: &str) -> bool {
    predicate.is_some_and(|p| p.call(id.to_owned()))
}
