//! Server-side rendering of a complete portfolio page.

use crate::components::{DeckProvider, SortedTechnologyCardGrid, TechnologyPredicate};
use crate::stylesheet::{FONT_AWESOME_CSS, STYLESHEET};
use dioxus::prelude::*;
use techdeck_kernel::{Deck, Selection};
use tracing::debug;

/// Renders a standalone HTML document with the sectioned grid of `technology_ids`.
///
/// Selected, featured and changed flags come from `selection`. Cards are not links and the
/// page carries no script: hovering and clicking have no effect.
#[must_use]
pub fn render_static_page(
    deck: &Deck,
    selection: &Selection,
    technology_ids: Vec<String>,
    title: &str,
) -> String {
    let props = StaticPortfolioProps {
        deck: deck.clone(),
        selection: selection.clone(),
        technology_ids,
        title: title.to_owned(),
    };

    let mut dom = VirtualDom::new_with_props(StaticPortfolio, props);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    debug!(bytes = html.len(), "Static portfolio rendered");

    format!("<!DOCTYPE html><html lang=\"en\">{html}</html>")
}

#[derive(Props, Clone, PartialEq)]
struct StaticPortfolioProps {
    deck: Deck,
    selection: Selection,
    technology_ids: Vec<String>,
    title: String,
}

#[allow(non_snake_case)]
fn StaticPortfolio(props: StaticPortfolioProps) -> Element {
    let StaticPortfolioProps { deck, selection, technology_ids, title } = props;
    let cols = deck.layout().cols;

    let is_selected = predicate(&selection, Selection::is_selected);
    let is_featured = predicate(&selection, Selection::is_featured);
    let is_changed = predicate(&selection, Selection::is_changed);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
            title { "{title}" }
            link { rel: "stylesheet", href: FONT_AWESOME_CSS }
            style { "{STYLESHEET}" }
        }
        body {
            h1 { "{title}" }
            DeckProvider { deck,
                SortedTechnologyCardGrid {
                    technology_ids,
                    cols,
                    key_string: "portfolio",
                    is_selected,
                    is_featured,
                    is_changed,
                }
            }
        }
    }
}

fn predicate(selection: &Selection, check: fn(&Selection, &str) -> bool) -> TechnologyPredicate {
    let selection = selection.clone();
    Callback::new(move |id: String| check(&selection, &id))
}
