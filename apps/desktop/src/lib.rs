use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use techdeck::cards::prelude::*;
use techdeck::domain::config::DeckConfig;
use techdeck::{catalog_ids, deck_from_config};

/// Everything the portfolio window renders, handed to the root component as context.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioState {
    pub title: String,
    pub deck: Deck,
    pub selection: Selection,
    pub technology_ids: Vec<String>,
}

impl PortfolioState {
    /// Whole catalog, with the configured portfolio as the initial selection.
    #[must_use]
    pub fn from_config(config: &DeckConfig) -> Self {
        let (deck, selection) = deck_from_config(config);
        Self {
            title: "Technology portfolio".to_owned(),
            deck,
            selection,
            technology_ids: catalog_ids(config),
        }
    }
}

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: "TechDeck".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the portfolio window and blocks until it is closed.
    pub fn launch(self, state: PortfolioState) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        tracing::info!(technologies = state.technology_ids.len(), "Launching portfolio window");

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(state.clone()))
            .launch(PortfolioApp);
    }
}

/// Portfolio editor: clicking a card toggles its selection, and uncommitted toggles carry the
/// changed marker until "Commit" is pressed. In feature mode clicks toggle the featured flag.
#[component]
pub fn PortfolioApp() -> Element {
    let state = use_context::<PortfolioState>();
    let mut selection = use_signal(|| state.selection.clone());
    let mut feature_mode = use_signal(|| false);

    let is_selected = use_callback(move |id: String| selection.read().is_selected(&id));
    let is_featured = use_callback(move |id: String| selection.read().is_featured(&id));
    let is_changed = use_callback(move |id: String| selection.read().is_changed(&id));

    let pending = selection.read().changed().count();
    let title = state.title.clone();
    let mode_class = if feature_mode() { "deck-mode deck-mode--active" } else { "deck-mode" };

    rsx! {
        link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        style { "{STYLESHEET}" }
        header { class: "deck-toolbar",
            h1 { "{title}" }
            span { class: "deck-pending", "{pending} pending" }
            button {
                disabled: pending == 0,
                onclick: move |_| {
                    selection.write().commit();
                    tracing::info!("Portfolio committed");
                },
                "Commit"
            }
            button {
                class: "{mode_class}",
                onclick: move |_| feature_mode.set(!feature_mode()),
                "Feature mode"
            }
        }
        DeckProvider { deck: state.deck.clone(),
            SortedTechnologyCardGrid {
                technology_ids: state.technology_ids.clone(),
                key_string: "portfolio",
                on_select: move |id: String| {
                    if feature_mode() {
                        selection.write().toggle_featured(&id);
                    } else {
                        selection.write().toggle(&id);
                    }
                },
                is_selected,
                is_featured,
                is_changed,
            }
        }
    }
}
