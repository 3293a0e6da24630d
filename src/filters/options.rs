use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LorcanaError;
use crate::models::{CardType, Rarity};

// ---------------------------------------------------------------------------
// TriState
// ---------------------------------------------------------------------------

/// A boolean facet that can also be left unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    #[default]
    Unset,
    True,
    False,
}

impl TriState {
    /// `true` when unset or equal to `value`.
    pub fn accepts(self, value: bool) -> bool {
        match self {
            TriState::Unset => true,
            TriState::True => value,
            TriState::False => !value,
        }
    }

    pub fn is_set(self) -> bool {
        self != TriState::Unset
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => TriState::Unset,
            Some(true) => TriState::True,
            Some(false) => TriState::False,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Unset => None,
            TriState::True => Some(true),
            TriState::False => Some(false),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorMatchMode
// ---------------------------------------------------------------------------

/// How the selected ink colors are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMatchMode {
    /// Cards containing any selected ink.
    #[default]
    Any,
    /// Cards made only of selected inks.
    Only,
    /// Dual-ink cards only.
    DualOnly,
}

impl ColorMatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMatchMode::Any => "any",
            ColorMatchMode::Only => "only",
            ColorMatchMode::DualOnly => "dual-only",
        }
    }
}

impl fmt::Display for ColorMatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMatchMode {
    type Err = LorcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(ColorMatchMode::Any),
            "only" => Ok(ColorMatchMode::Only),
            "dual-only" => Ok(ColorMatchMode::DualOnly),
            other => Err(LorcanaError::InvalidArgument(format!(
                "unknown color match mode '{}'",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// NumericRange
// ---------------------------------------------------------------------------

/// Inclusive range; a missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl NumericRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Absent values satisfy every range.
    pub fn accepts(&self, value: Option<u32>) -> bool {
        value.map_or(true, |v| self.contains(v))
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

// ---------------------------------------------------------------------------
// Ownership facets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OwnershipFilter {
    #[default]
    All,
    Owned,
    NotOwned,
}

impl OwnershipFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            OwnershipFilter::All => "all",
            OwnershipFilter::Owned => "owned",
            OwnershipFilter::NotOwned => "not-owned",
        }
    }
}

impl FromStr for OwnershipFilter {
    type Err = LorcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(OwnershipFilter::All),
            "owned" => Ok(OwnershipFilter::Owned),
            "not-owned" => Ok(OwnershipFilter::NotOwned),
            other => Err(LorcanaError::InvalidArgument(format!(
                "unknown ownership filter '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityComparator {
    Eq,
    Gte,
    Lte,
}

impl FromStr for QuantityComparator {
    type Err = LorcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(QuantityComparator::Eq),
            "gte" => Ok(QuantityComparator::Gte),
            "lte" => Ok(QuantityComparator::Lte),
            other => Err(LorcanaError::InvalidArgument(format!(
                "unknown quantity comparator '{}'",
                other
            ))),
        }
    }
}

/// Compare the owned copy count of a card against a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityFilter {
    pub comparator: QuantityComparator,
    pub value: u32,
}

impl QuantityFilter {
    pub fn accepts(&self, owned: u32) -> bool {
        match self.comparator {
            QuantityComparator::Eq => owned == self.value,
            QuantityComparator::Gte => owned >= self.value,
            QuantityComparator::Lte => owned <= self.value,
        }
    }
}

// ---------------------------------------------------------------------------
// FilterOptions
// ---------------------------------------------------------------------------

/// Every facet of the card browser.
///
/// The default value constrains nothing: empty lists, unset tri-states,
/// unbounded ranges, no-ink cards included, ownership ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub search: String,
    pub sets: Vec<String>,
    pub colors: Vec<String>,
    pub color_match_mode: ColorMatchMode,
    pub rarities: Vec<Rarity>,
    pub types: Vec<CardType>,
    pub stories: Vec<String>,
    pub subtypes: Vec<String>,
    pub costs: Vec<u32>,
    pub cost_range: NumericRange,
    pub strength_range: NumericRange,
    pub willpower_range: NumericRange,
    pub lore_range: NumericRange,
    pub inkwell: TriState,
    pub enchanted: TriState,
    pub special: TriState,
    pub include_no_ink: bool,
    pub ownership: OwnershipFilter,
    pub owned_quantity: Option<QuantityFilter>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            search: String::new(),
            sets: Vec::new(),
            colors: Vec::new(),
            color_match_mode: ColorMatchMode::Any,
            rarities: Vec::new(),
            types: Vec::new(),
            stories: Vec::new(),
            subtypes: Vec::new(),
            costs: Vec::new(),
            cost_range: NumericRange::default(),
            strength_range: NumericRange::default(),
            willpower_range: NumericRange::default(),
            lore_range: NumericRange::default(),
            inkwell: TriState::Unset,
            enchanted: TriState::Unset,
            special: TriState::Unset,
            include_no_ink: true,
            ownership: OwnershipFilter::All,
            owned_quantity: None,
        }
    }
}

impl FilterOptions {
    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }

    /// Number of facets that currently constrain results.
    pub fn active_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.sets.is_empty(),
            !self.colors.is_empty() || self.color_match_mode == ColorMatchMode::DualOnly,
            !self.rarities.is_empty(),
            !self.types.is_empty(),
            !self.stories.is_empty(),
            !self.subtypes.is_empty(),
            !self.costs.is_empty(),
            !self.cost_range.is_unbounded(),
            !self.strength_range.is_unbounded(),
            !self.willpower_range.is_unbounded(),
            !self.lore_range.is_unbounded(),
            self.inkwell.is_set(),
            self.enchanted.is_set(),
            self.special.is_set(),
            !self.include_no_ink,
            self.ownership != OwnershipFilter::All,
            self.owned_quantity.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

// ---------------------------------------------------------------------------
// FilterBuilder
// ---------------------------------------------------------------------------

/// Chainable construction of [`FilterOptions`].
///
/// ```rust
/// use lorcana_search::filters::{ColorMatchMode, FilterOptions};
///
/// let filters = FilterOptions::builder()
///     .search("cost>3")
///     .colors(&["Amber", "Steel"])
///     .color_match_mode(ColorMatchMode::DualOnly)
///     .build();
/// assert_eq!(filters.colors.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    options: FilterOptions,
}

impl FilterBuilder {
    pub fn search(&mut self, query: &str) -> &mut Self {
        self.options.search = query.to_string();
        self
    }

    pub fn sets(&mut self, sets: &[&str]) -> &mut Self {
        self.options.sets = sets.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn colors(&mut self, colors: &[&str]) -> &mut Self {
        self.options.colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn color_match_mode(&mut self, mode: ColorMatchMode) -> &mut Self {
        self.options.color_match_mode = mode;
        self
    }

    pub fn rarities(&mut self, rarities: &[Rarity]) -> &mut Self {
        self.options.rarities = rarities.to_vec();
        self
    }

    pub fn types(&mut self, types: &[CardType]) -> &mut Self {
        self.options.types = types.to_vec();
        self
    }

    pub fn stories(&mut self, stories: &[&str]) -> &mut Self {
        self.options.stories = stories.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn subtypes(&mut self, subtypes: &[&str]) -> &mut Self {
        self.options.subtypes = subtypes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn costs(&mut self, costs: &[u32]) -> &mut Self {
        self.options.costs = costs.to_vec();
        self
    }

    pub fn cost_range(&mut self, min: u32, max: u32) -> &mut Self {
        self.options.cost_range = NumericRange::new(min, max);
        self
    }

    pub fn strength_range(&mut self, min: u32, max: u32) -> &mut Self {
        self.options.strength_range = NumericRange::new(min, max);
        self
    }

    pub fn willpower_range(&mut self, min: u32, max: u32) -> &mut Self {
        self.options.willpower_range = NumericRange::new(min, max);
        self
    }

    pub fn lore_range(&mut self, min: u32, max: u32) -> &mut Self {
        self.options.lore_range = NumericRange::new(min, max);
        self
    }

    pub fn inkwell(&mut self, value: bool) -> &mut Self {
        self.options.inkwell = Some(value).into();
        self
    }

    pub fn enchanted(&mut self, value: bool) -> &mut Self {
        self.options.enchanted = Some(value).into();
        self
    }

    pub fn special(&mut self, value: bool) -> &mut Self {
        self.options.special = Some(value).into();
        self
    }

    pub fn include_no_ink(&mut self, include: bool) -> &mut Self {
        self.options.include_no_ink = include;
        self
    }

    pub fn ownership(&mut self, ownership: OwnershipFilter) -> &mut Self {
        self.options.ownership = ownership;
        self
    }

    pub fn owned_quantity(&mut self, comparator: QuantityComparator, value: u32) -> &mut Self {
        self.options.owned_quantity = Some(QuantityFilter { comparator, value });
        self
    }

    pub fn build(&self) -> FilterOptions {
        self.options.clone()
    }
}
