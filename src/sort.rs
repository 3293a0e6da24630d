//! Card ordering.
//!
//! Each [`SortField`] maps to a typed comparator. Sorting is stable: cards
//! that compare equal keep their input order in both directions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LorcanaError;
use crate::models::{Card, SetCatalog};

// ---------------------------------------------------------------------------
// SortField / SortDirection / SortOption
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Cost,
    Rarity,
    Set,
    Number,
    Color,
    Type,
    Story,
    Strength,
    Willpower,
    Lore,
}

impl SortField {
    pub const ALL: [SortField; 11] = [
        SortField::Name,
        SortField::Cost,
        SortField::Rarity,
        SortField::Set,
        SortField::Number,
        SortField::Color,
        SortField::Type,
        SortField::Story,
        SortField::Strength,
        SortField::Willpower,
        SortField::Lore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Cost => "cost",
            SortField::Rarity => "rarity",
            SortField::Set => "set",
            SortField::Number => "number",
            SortField::Color => "color",
            SortField::Type => "type",
            SortField::Story => "story",
            SortField::Strength => "strength",
            SortField::Willpower => "willpower",
            SortField::Lore => "lore",
        }
    }

    /// Ascending comparison of two cards on this field.
    pub fn compare(self, a: &Card, b: &Card, sets: &SetCatalog) -> Ordering {
        match self {
            SortField::Name => cmp_lowercase(&a.name, &b.name),
            SortField::Cost => a.cost.cmp(&b.cost),
            SortField::Rarity => a.rarity.priority().cmp(&b.rarity.priority()),
            SortField::Set => sets.rank(&a.set_code).cmp(&sets.rank(&b.set_code)),
            SortField::Number => a.number.cmp(&b.number),
            SortField::Color => cmp_lowercase(&a.color, &b.color),
            SortField::Type => cmp_lowercase(a.card_type.as_str(), b.card_type.as_str()),
            SortField::Story => cmp_lowercase(
                a.story.as_deref().unwrap_or(""),
                b.story.as_deref().unwrap_or(""),
            ),
            SortField::Strength => a.strength.unwrap_or(0).cmp(&b.strength.unwrap_or(0)),
            SortField::Willpower => a.willpower.unwrap_or(0).cmp(&b.willpower.unwrap_or(0)),
            SortField::Lore => a.lore.unwrap_or(0).cmp(&b.lore.unwrap_or(0)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = LorcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| LorcanaError::InvalidArgument(format!("unknown sort field '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = LorcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(LorcanaError::InvalidArgument(format!(
                "unknown sort direction '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOption {
    fn default() -> Self {
        Self::asc(SortField::Set)
    }
}

impl SortOption {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    pub fn compare(&self, a: &Card, b: &Card, sets: &SetCatalog) -> Ordering {
        self.direction.apply(self.field.compare(a, b, sets))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction.as_str())
    }
}

// ---------------------------------------------------------------------------
// sort_cards
// ---------------------------------------------------------------------------

/// Return the cards in a new vector ordered by `sort`. The input is untouched.
pub fn sort_cards<'c>(cards: &[&'c Card], sort: SortOption, sets: &SetCatalog) -> Vec<&'c Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| sort.compare(a, b, sets));
    tracing::debug!(count = sorted.len(), sort = %sort, "sorted cards");
    sorted
}

fn cmp_lowercase(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
