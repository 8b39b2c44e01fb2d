//! UI Components

mod detail_modal;
mod pagination;
mod pokemon_card;
mod search_and_filter;

pub use detail_modal::DetailModal;
pub use pagination::Pagination;
pub use pokemon_card::PokemonCard;
pub use search_and_filter::SearchAndFilter;
