use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{DUAL_INK_SEPARATOR, RARITY_ORDER};
use crate::error::LorcanaError;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Card rarity, declared in ascending priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Super Rare")]
    SuperRare,
    Legendary,
    Enchanted,
    Special,
}

impl Rarity {
    /// Position of this rarity in [`RARITY_ORDER`].
    pub fn priority(self) -> usize {
        RARITY_ORDER
            .iter()
            .position(|r| *r == self)
            .unwrap_or(RARITY_ORDER.len())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Enchanted => "Enchanted",
            Rarity::Special => "Special",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = LorcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RARITY_ORDER
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LorcanaError::InvalidArgument(format!("unknown rarity '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// CardType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Character,
    Action,
    Item,
    Location,
}

impl CardType {
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Character => "Character",
            CardType::Action => "Action",
            CardType::Item => "Item",
            CardType::Location => "Location",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Ability
// ---------------------------------------------------------------------------

/// One ability printed on a card. Every part is optional in the source data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: Option<String>,
    pub effect: Option<String>,
    pub keyword: Option<String>,
    pub full_text: Option<String>,
    pub reminder_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Card: an immutable catalog record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub version: Option<String>,
    pub full_name: String,
    pub set_code: String,
    pub number: u32,
    pub rarity: Rarity,
    /// Single ink (`"Amber"`), dual ink (`"Amber-Steel"`) or empty for no ink.
    #[serde(default)]
    pub color: String,
    pub cost: u32,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub strength: Option<u32>,
    pub willpower: Option<u32>,
    pub lore: Option<u32>,
    #[serde(default)]
    pub inkwell: bool,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    pub story: Option<String>,
    pub promo_grouping: Option<String>,
    pub full_text: Option<String>,
}

impl Card {
    /// `true` for cards without an ink color (Illumineer's Quest).
    pub fn has_no_ink(&self) -> bool {
        self.color.is_empty()
    }

    pub fn is_dual_ink(&self) -> bool {
        self.color.contains(DUAL_INK_SEPARATOR)
    }

    /// The individual ink colors of this card (zero, one or two).
    pub fn inks(&self) -> impl Iterator<Item = &str> {
        self.color
            .split(DUAL_INK_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn is_enchanted(&self) -> bool {
        self.rarity == Rarity::Enchanted
    }

    /// Special rarity or any promo grouping marker.
    pub fn is_special(&self) -> bool {
        self.rarity == Rarity::Special
            || self
                .promo_grouping
                .as_deref()
                .is_some_and(|g| !g.trim().is_empty())
    }

    /// Every ability's name, effect, keyword, full text and reminder text,
    /// followed by the card's own full text, space-joined.
    pub fn ability_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for ability in &self.abilities {
            for part in [
                &ability.name,
                &ability.effect,
                &ability.keyword,
                &ability.full_text,
                &ability.reminder_text,
            ] {
                if let Some(text) = part {
                    parts.push(text);
                }
            }
        }
        if let Some(ref text) = self.full_text {
            parts.push(text);
        }
        parts.join(" ")
    }
}
