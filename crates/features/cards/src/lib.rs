//! # Technology cards
//!
//! Dioxus components that render technology tiles from a [`Deck`](techdeck_kernel::Deck):
//!
//! * [`TechnologyCard`]: one tile with selected/featured/changed/conventional overlays and a
//!   local hover state;
//! * [`TechnologyCardGrid`]: tiles of a list of technology identifiers in a wrapping layout;
//! * [`SortedTechnologyCardGrid`]: the same tiles grouped under sector headings.
//!
//! All of them read the deck from context, so they must be rendered below a [`DeckProvider`].
//! Include [`STYLESHEET`] and the Font Awesome stylesheet ([`FONT_AWESOME_CSS`]) once per page.
//!
//! ## Usage
//! ```rust,ignore
//! use dioxus::prelude::*;
//! use techdeck_cards::prelude::*;
//!
//! #[component]
//! fn Portfolio(deck: Deck, ids: Vec<String>) -> Element {
//!     rsx! {
//!         DeckProvider { deck,
//!             SortedTechnologyCardGrid { technology_ids: ids, key_string: "portfolio" }
//!         }
//!     }
//! }
//! ```
//!
//! With the `ssr` feature, [`render_static_page`] renders a complete HTML document.

mod components;
mod glyph;
#[cfg(feature = "ssr")]
mod page;
mod stylesheet;

pub use crate::components::*;
pub use crate::glyph::{Glyph, ICON_FAMILY, icon_class};
#[cfg(feature = "ssr")]
pub use crate::page::render_static_page;
pub use crate::stylesheet::{FONT_AWESOME_CSS, STYLESHEET};

pub mod prelude {
    pub use crate::components::*;
    pub use crate::stylesheet::{FONT_AWESOME_CSS, STYLESHEET};
    pub use techdeck_kernel::domain::theme::{ColorToken, IconHandle};
    pub use techdeck_kernel::{Deck, Selection};
}
