//! Grouping of sorted cards into named buckets.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{NO_INK_LABEL, NO_STORY_LABEL};
use crate::error::LorcanaError;
use crate::models::{Card, SetCatalog};

// ---------------------------------------------------------------------------
// GroupBy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    None,
    Set,
    Color,
    Rarity,
    Type,
    Story,
    Cost,
}

impl GroupBy {
    pub const ALL: [GroupBy; 7] = [
        GroupBy::None,
        GroupBy::Set,
        GroupBy::Color,
        GroupBy::Rarity,
        GroupBy::Type,
        GroupBy::Story,
        GroupBy::Cost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GroupBy::None => "none",
            GroupBy::Set => "set",
            GroupBy::Color => "color",
            GroupBy::Rarity => "rarity",
            GroupBy::Type => "type",
            GroupBy::Story => "story",
            GroupBy::Cost => "cost",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = LorcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupBy::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| LorcanaError::InvalidArgument(format!("unknown group-by '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// CardGroup / CardGroups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CardGroup<'c> {
    pub key: String,
    pub cards: Vec<&'c Card>,
}

/// Buckets in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardGroups<'c> {
    groups: Vec<CardGroup<'c>>,
}

impl<'c> CardGroups<'c> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, key: &str) -> Option<&[&'c Card]> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| g.cards.as_slice())
    }

    /// Bucket keys in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardGroup<'c>> {
        self.groups.iter()
    }

    /// Total number of cards over all buckets.
    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }
}

impl<'c> IntoIterator for CardGroups<'c> {
    type Item = CardGroup<'c>;
    type IntoIter = std::vec::IntoIter<CardGroup<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

// ---------------------------------------------------------------------------
// group_cards
// ---------------------------------------------------------------------------

/// Bucket `cards` by `group_by`. Cards keep their input order inside each
/// bucket. [`GroupBy::None`] yields no buckets.
pub fn group_cards<'c>(cards: &[&'c Card], group_by: GroupBy, sets: &SetCatalog) -> CardGroups<'c> {
    if group_by == GroupBy::None {
        return CardGroups::default();
    }

    // (rank, bucket); rank is 0 for alphabetical dimensions
    let mut buckets: Vec<(usize, CardGroup<'c>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for &card in cards {
        let (rank, key) = bucket_of(card, group_by, sets);
        match index.get(&key) {
            Some(&i) => buckets[i].1.cards.push(card),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((
                    rank,
                    CardGroup {
                        key,
                        cards: vec![card],
                    },
                ));
            }
        }
    }

    // Ties on rank (undeclared set codes) fall back to the key.
    buckets.sort_by(|(rank_a, a), (rank_b, b)| {
        rank_a.cmp(rank_b).then_with(|| a.key.cmp(&b.key))
    });

    tracing::debug!(
        group_by = %group_by,
        cards = cards.len(),
        buckets = buckets.len(),
        "grouped cards"
    );
    CardGroups {
        groups: buckets.into_iter().map(|(_, group)| group).collect(),
    }
}

/// Bucket key of a card and the bucket's rank for fixed-order dimensions.
fn bucket_of(card: &Card, group_by: GroupBy, sets: &SetCatalog) -> (usize, String) {
    match group_by {
        GroupBy::Set => (
            sets.rank(&card.set_code),
            sets.display_name(&card.set_code).to_string(),
        ),
        GroupBy::Color => {
            let key = if card.has_no_ink() {
                NO_INK_LABEL.to_string()
            } else {
                card.color.clone()
            };
            (0, key)
        }
        GroupBy::Rarity => (card.rarity.priority(), card.rarity.to_string()),
        GroupBy::Type => (0, card.card_type.to_string()),
        GroupBy::Story => {
            let story = card.story.as_deref().filter(|s| !s.trim().is_empty());
            (0, story.unwrap_or(NO_STORY_LABEL).to_string())
        }
        GroupBy::Cost => (card.cost as usize, format!("Cost {}", card.cost)),
        GroupBy::None => (0, String::new()),
    }
}
