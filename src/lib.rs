//! Lorcana card search for Rust.
//!
//! Implements the card browser of a Lorcana collection tracker: a
//! GitHub-style search language (`ink:amber cost>3 "let it go"`), facet
//! filters, sorting and grouping over an in-memory card catalog. Everything
//! is synchronous and never mutates the catalog.
//!
//! # Quick start
//!
//! ```no_run
//! use lorcana_search::{BrowseRequest, CardBrowser, Collection, GroupBy};
//!
//! let browser = CardBrowser::builder()
//!     .catalog_path("allCards.json")
//!     .build()
//!     .unwrap();
//!
//! let mut request = BrowseRequest::default();
//! request.filters.search = "ink:amber cost<=2".to_string();
//! request.group_by = GroupBy::Rarity;
//!
//! let result = browser.browse(&request, &Collection::new());
//! println!("{} cards", result.card_count());
//! ```

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod group;
pub mod models;
pub mod search;
pub mod sort;

pub use browser::{BrowseRequest, BrowseResult, CardBrowser, CardBrowserBuilder};
pub use catalog::{CardCatalog, StatBounds};
pub use error::{LorcanaError, Result};
pub use filters::{filter_cards, FilterOptions};
pub use group::{group_cards, CardGroup, CardGroups, GroupBy};
pub use models::{Card, Collection, Ownership, OwnershipLookup, Rarity, SetCatalog};
pub use search::{tokenize, QueryEditor, SearchQuery, Token};
pub use sort::{sort_cards, SortDirection, SortField, SortOption};
