mod card;
mod grid;
mod provider;
mod sorted;

pub use card::{TechnologyCard, TechnologyCardProps};
pub use grid::{TechnologyCardGrid, TechnologyCardGridProps, TechnologyPredicate};
pub use provider::{DeckProvider, DeckProviderProps, use_deck};
pub use sorted::{SortedTechnologyCardGrid, SortedTechnologyCardGridProps};
