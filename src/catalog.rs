//! In-memory card catalog.
//!
//! Holds the full card list for a session together with the set catalog, and
//! answers the lookups the browser needs besides filtering: by id, by name,
//! random samples, and the distinct values offered by the facet pickers.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::{LorcanaError, Result};
use crate::filters::NumericRange;
use crate::models::{Card, SetCatalog};

// ---------------------------------------------------------------------------
// Catalog documents
// ---------------------------------------------------------------------------

/// Accepted JSON shapes: a bare card array, or an object with `cards` and
/// optional `sets`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Cards(Vec<Card>),
    Full {
        cards: Vec<Card>,
        #[serde(default)]
        sets: Option<SetCatalog>,
    },
}

// ---------------------------------------------------------------------------
// StatBounds
// ---------------------------------------------------------------------------

/// The full data range of each numeric stat in a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatBounds {
    pub cost: NumericRange,
    pub strength: NumericRange,
    pub willpower: NumericRange,
    pub lore: NumericRange,
}

fn widen(range: &mut NumericRange, value: Option<u32>) {
    if let Some(v) = value {
        range.min = Some(range.min.map_or(v, |m| m.min(v)));
        range.max = Some(range.max.map_or(v, |m| m.max(v)));
    }
}

// ---------------------------------------------------------------------------
// CardCatalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<Card>,
    sets: SetCatalog,
    by_id: HashMap<u32, usize>,
}

impl CardCatalog {
    /// Build a catalog. Card ids must be unique.
    pub fn new(cards: Vec<Card>, sets: SetCatalog) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(cards.len());
        for (index, card) in cards.iter().enumerate() {
            if by_id.insert(card.id, index).is_some() {
                return Err(LorcanaError::InvalidArgument(format!(
                    "duplicate card id {} ({})",
                    card.id, card.full_name
                )));
            }
        }
        tracing::info!(cards = cards.len(), sets = sets.sets().len(), "built card catalog");
        Ok(Self { cards, sets, by_id })
    }

    /// Parse a catalog from JSON. Uses the built-in sets unless the document
    /// declares its own.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_document(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LorcanaError::NotFound(format!(
                "catalog file {}",
                path.display()
            )));
        }
        let file = File::open(path)?;
        tracing::info!(path = %path.display(), "loading card catalog");
        Self::from_reader(BufReader::new(file))
    }

    fn from_document(doc: CatalogDocument) -> Result<Self> {
        match doc {
            CatalogDocument::Cards(cards) => Self::new(cards, SetCatalog::default()),
            CatalogDocument::Full { cards, sets } => Self::new(cards, sets.unwrap_or_default()),
        }
    }

    /// Replace the set catalog.
    pub fn with_sets(mut self, sets: SetCatalog) -> Self {
        self.sets = sets;
        self
    }

    // -- Accessors ---------------------------------------------------------

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn sets(&self) -> &SetCatalog {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    // -- Lookups -----------------------------------------------------------

    pub fn get_by_id(&self, id: u32) -> Option<&Card> {
        self.by_id.get(&id).map(|&index| &self.cards[index])
    }

    /// All printings whose name or full name equals `name` (case-insensitive),
    /// optionally restricted to one set.
    pub fn get_by_name(&self, name: &str, set_code: Option<&str>) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(name) || c.full_name.eq_ignore_ascii_case(name))
            .filter(|c| set_code.map_or(true, |code| c.set_code == code))
            .collect()
    }

    /// Up to `count` distinct cards chosen at random.
    pub fn random(&self, count: usize) -> Vec<&Card> {
        let mut rng = rand::thread_rng();
        self.cards.choose_multiple(&mut rng, count).collect()
    }

    // -- Facet values ------------------------------------------------------

    /// Distinct stories, sorted.
    pub fn stories(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter_map(|c| c.story.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct subtypes, sorted.
    pub fn subtypes(&self) -> Vec<&str> {
        self.cards
            .iter()
            .flat_map(|c| c.subtypes.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Minimum and maximum of every numeric stat. A stat no card has stays
    /// unbounded.
    pub fn stat_bounds(&self) -> StatBounds {
        let mut bounds = StatBounds::default();
        for card in &self.cards {
            widen(&mut bounds.cost, Some(card.cost));
            widen(&mut bounds.strength, card.strength);
            widen(&mut bounds.willpower, card.willpower);
            widen(&mut bounds.lore, card.lore);
        }
        bounds
    }
}
