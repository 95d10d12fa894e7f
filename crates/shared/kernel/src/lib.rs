//! Kernel utilities shared by the card slice and the applications.
//! Keep this crate free of rendering: it resolves identifiers, decides card appearance, groups
//! technologies by sector and tracks portfolio selections.
//!
//! ## Resolving and styling a card
//! ```rust
//! use techdeck_domain::catalog::{CatalogSettings, SectorColor, TechnologyMetadata};
//! use techdeck_domain::card::CardFlags;
//! use techdeck_domain::theme::Theme;
//! use techdeck_kernel::catalog::Catalog;
//! use techdeck_kernel::style::CardStyle;
//!
//! let mut settings = CatalogSettings::default();
//! settings.sectors.push(SectorColor::new("Transport", "teal"));
//! settings
//!     .technology_metadata
//!     .insert("ev".to_owned(), TechnologyMetadata::new("Electric Vehicles", "Transport"));
//!
//! let catalog = Catalog::new(settings);
//! let tech = catalog.resolve("ev").unwrap();
//! let style = CardStyle::compute(&Theme::default(), &tech.color, CardFlags::empty(), 3, None);
//! assert_eq!(style.bg_color, "default");
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! let cfg: techdeck_domain::config::DeckConfig =
//!     techdeck_kernel::config::load_config(Some("techdeck")).unwrap();
//! ```
pub mod catalog;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod deck;
pub mod error;
pub mod grouping;
pub mod selection;
pub mod style;

pub use crate::catalog::{Catalog, ResolvedTechnology};
pub use crate::deck::Deck;
pub use crate::error::{KernelError, KernelErrorExt};
pub use crate::grouping::{SectorGroup, partition_by_sector};
pub use crate::selection::Selection;
pub use crate::style::{CardAppearance, CardStyle};
pub use techdeck_domain as domain;
