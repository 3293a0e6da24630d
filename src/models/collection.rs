use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

/// How many copies of a card a collection holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    pub normal: u32,
    pub foil: u32,
    pub total: u32,
}

impl Ownership {
    pub fn new(normal: u32, foil: u32) -> Self {
        Self {
            normal,
            foil,
            total: normal.saturating_add(foil),
        }
    }

    pub fn is_owned(&self) -> bool {
        self.total > 0
    }
}

// ---------------------------------------------------------------------------
// OwnershipLookup: supplied by the collection store
// ---------------------------------------------------------------------------

/// Synchronous ownership lookup consulted by the ownership facets.
///
/// Implemented for [`Collection`] and for any `Fn(u32) -> Ownership`.
pub trait OwnershipLookup {
    fn ownership(&self, card_id: u32) -> Ownership;
}

impl<F> OwnershipLookup for F
where
    F: Fn(u32) -> Ownership,
{
    fn ownership(&self, card_id: u32) -> Ownership {
        self(card_id)
    }
}

// ---------------------------------------------------------------------------
// Collection: in-memory ownership store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    entries: HashMap<u32, Ownership>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add copies of a card, accumulating onto what is already owned.
    pub fn add(&mut self, card_id: u32, normal: u32, foil: u32) -> &mut Self {
        let entry = self.entries.entry(card_id).or_default();
        *entry = Ownership::new(
            entry.normal.saturating_add(normal),
            entry.foil.saturating_add(foil),
        );
        self
    }

    /// Replace the owned counts for a card. Zero counts remove the entry.
    pub fn set(&mut self, card_id: u32, normal: u32, foil: u32) -> &mut Self {
        if normal == 0 && foil == 0 {
            self.entries.remove(&card_id);
        } else {
            self.entries.insert(card_id, Ownership::new(normal, foil));
        }
        self
    }

    pub fn get(&self, card_id: u32) -> Ownership {
        self.entries.get(&card_id).copied().unwrap_or_default()
    }

    /// Number of distinct cards with at least one copy.
    pub fn unique_cards(&self) -> usize {
        self.entries.values().filter(|o| o.is_owned()).count()
    }

    /// Total copies across all cards.
    pub fn total_cards(&self) -> u32 {
        self.entries
            .values()
            .fold(0u32, |sum, o| sum.saturating_add(o.total))
    }
}

impl OwnershipLookup for Collection {
    fn ownership(&self, card_id: u32) -> Ownership {
        self.get(card_id)
    }
}
