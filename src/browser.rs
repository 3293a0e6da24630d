//! The card browser pipeline: filter, then sort, then group.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::CardCatalog;
use crate::error::Result;
use crate::filters::{filter_cards, FilterOptions};
use crate::group::{group_cards, CardGroups, GroupBy};
use crate::models::{Card, OwnershipLookup, SetCatalog};
use crate::sort::{sort_cards, SortOption};

// ---------------------------------------------------------------------------
// CardBrowserBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`CardBrowser`].
///
/// Cards come either from [`cards`](Self::cards) or from a catalog file via
/// [`catalog_path`](Self::catalog_path); the file wins when both are given.
#[derive(Default)]
pub struct CardBrowserBuilder {
    cards: Vec<Card>,
    sets: Option<SetCatalog>,
    catalog_path: Option<PathBuf>,
}

impl CardBrowserBuilder {
    pub fn cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Override the built-in set catalog.
    pub fn sets(mut self, sets: SetCatalog) -> Self {
        self.sets = Some(sets);
        self
    }

    /// Load cards from a JSON catalog file.
    pub fn catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.catalog_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the browser, validating the catalog.
    pub fn build(self) -> Result<CardBrowser> {
        let catalog = match self.catalog_path {
            Some(path) => {
                let catalog = CardCatalog::from_path(path)?;
                match self.sets {
                    Some(sets) => catalog.with_sets(sets),
                    None => catalog,
                }
            }
            None => CardCatalog::new(self.cards, self.sets.unwrap_or_default())?,
        };
        Ok(CardBrowser { catalog })
    }
}

// ---------------------------------------------------------------------------
// BrowseRequest / BrowseResult
// ---------------------------------------------------------------------------

/// Everything the browser view asks for in one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseRequest {
    pub filters: FilterOptions,
    pub sort: SortOption,
    pub group_by: GroupBy,
    /// Cards shown regardless of filters.
    pub pinned_ids: HashSet<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseResult<'c> {
    Flat(Vec<&'c Card>),
    Grouped(CardGroups<'c>),
}

impl<'c> BrowseResult<'c> {
    /// Number of cards over the whole result.
    pub fn card_count(&self) -> usize {
        match self {
            BrowseResult::Flat(cards) => cards.len(),
            BrowseResult::Grouped(groups) => groups.card_count(),
        }
    }

    /// Cards in display order, flattening groups.
    pub fn cards(&self) -> Vec<&'c Card> {
        match self {
            BrowseResult::Flat(cards) => cards.clone(),
            BrowseResult::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.cards.iter().copied())
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// CardBrowser
// ---------------------------------------------------------------------------

pub struct CardBrowser {
    catalog: CardCatalog,
}

impl CardBrowser {
    pub fn builder() -> CardBrowserBuilder {
        CardBrowserBuilder::default()
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Run the full pipeline for one request.
    pub fn browse<L>(&self, request: &BrowseRequest, ownership: &L) -> BrowseResult<'_>
    where
        L: OwnershipLookup + ?Sized,
    {
        let sets = self.catalog.sets();
        let filtered = filter_cards(
            self.catalog.cards(),
            &request.filters.search,
            &request.filters,
            &request.pinned_ids,
            ownership,
        );
        let sorted = sort_cards(&filtered, request.sort, sets);
        match request.group_by {
            GroupBy::None => BrowseResult::Flat(sorted),
            group_by => BrowseResult::Grouped(group_cards(&sorted, group_by, sets)),
        }
    }
}
