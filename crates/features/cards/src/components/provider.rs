use dioxus::prelude::*;
use techdeck_kernel::Deck;

/// Makes `deck` available to every card component below it.
#[component]
pub fn DeckProvider(deck: Deck, children: Element) -> Element {
    use_context_provider(move || deck);
    rsx! {
        {children}
    }
}

/// The deck installed by the nearest [`DeckProvider`].
///
/// # Panics
/// Panics when called outside of a [`DeckProvider`].
#[must_use]
pub fn use_deck() -> Deck {
    use_context::<Deck>()
}
