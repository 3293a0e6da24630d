//! Facet filtering of the card catalog.

pub mod engine;
pub mod options;

pub use engine::{filter_cards, CardFilter};
pub use options::{
    ColorMatchMode, FilterBuilder, FilterOptions, NumericRange, OwnershipFilter,
    QuantityComparator, QuantityFilter, TriState,
};
