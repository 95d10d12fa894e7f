use crate::components::grid::{TechnologyCardGrid, TechnologyPredicate};
use crate::components::provider::use_deck;
use dioxus::prelude::*;
use techdeck_kernel::partition_by_sector;

/// [`TechnologyCardGrid`]s split by sector, each under its sector heading.
///
/// Sectors appear in the catalog's sector order; sectors without any of the given
/// technologies get neither heading nor grid.
#[component]
pub fn SortedTechnologyCardGrid(
    technology_ids: Vec<String>,
    cols: Option<u8>,
    #[props(default)] key_string: String,
    on_select: Option<EventHandler<String>>,
    is_selected: Option<TechnologyPredicate>,
    is_featured: Option<TechnologyPredicate>,
    is_changed: Option<TechnologyPredicate>,
) -> Element {
    let deck = use_deck();
    let groups = partition_by_sector(deck.catalog(), &technology_ids);

    rsx! {
        for group in groups {
            section { key: "{group.sector}", class: "tech-sector",
                h3 { class: "portfolio-tech", "{group.sector}" }
                TechnologyCardGrid {
                    technology_ids: group.ids,
                    cols,
                    key_string: key_string.clone(),
                    on_select,
                    is_selected,
                    is_featured,
                    is_changed,
                }
            }
        }
    }
}
