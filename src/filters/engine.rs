//! Facet evaluation.
//!
//! A card passes when it is pinned, or when the search query and every
//! facet of [`FilterOptions`] accept it.

use std::collections::HashSet;

use crate::config::DUAL_INK_SEPARATOR;
use crate::filters::options::{ColorMatchMode, FilterOptions, OwnershipFilter};
use crate::models::{Card, OwnershipLookup};
use crate::search::SearchQuery;

// ---------------------------------------------------------------------------
// CardFilter
// ---------------------------------------------------------------------------

/// Filter options with the search query already tokenized.
pub struct CardFilter<'a> {
    options: &'a FilterOptions,
    query: SearchQuery,
}

impl<'a> CardFilter<'a> {
    pub fn new(options: &'a FilterOptions) -> Self {
        Self::with_query(&options.search, options)
    }

    /// Use `search_query` instead of `options.search`.
    pub fn with_query(search_query: &str, options: &'a FilterOptions) -> Self {
        Self {
            options,
            query: SearchQuery::parse(search_query),
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Evaluate every facet against one card.
    pub fn matches<L>(&self, card: &Card, ownership: &L) -> bool
    where
        L: OwnershipLookup + ?Sized,
    {
        let o = self.options;
        self.query.matches(card)
            && list_accepts(&o.sets, &card.set_code)
            && (o.rarities.is_empty() || o.rarities.contains(&card.rarity))
            && (o.types.is_empty() || o.types.contains(&card.card_type))
            && story_accepts(&o.stories, card.story.as_deref())
            && subtypes_accept(&o.subtypes, &card.subtypes)
            && color_accepts(o, card)
            && (o.costs.is_empty() || o.costs.contains(&card.cost))
            && o.cost_range.contains(card.cost)
            && o.strength_range.accepts(card.strength)
            && o.willpower_range.accepts(card.willpower)
            && o.lore_range.accepts(card.lore)
            && o.inkwell.accepts(card.inkwell)
            && o.enchanted.accepts(card.is_enchanted())
            && o.special.accepts(card.is_special())
            && ownership_accepts(o, card.id, ownership)
    }
}

// ---------------------------------------------------------------------------
// filter_cards
// ---------------------------------------------------------------------------

/// Filter `cards`, keeping input order.
///
/// Cards whose id is in `pinned_ids` are always kept. `search_query` takes
/// the place of `filters.search`.
pub fn filter_cards<'c, L>(
    cards: &'c [Card],
    search_query: &str,
    filters: &FilterOptions,
    pinned_ids: &HashSet<u32>,
    ownership: &L,
) -> Vec<&'c Card>
where
    L: OwnershipLookup + ?Sized,
{
    let filter = CardFilter::with_query(search_query, filters);
    let matched: Vec<&Card> = cards
        .iter()
        .filter(|card| pinned_ids.contains(&card.id) || filter.matches(card, ownership))
        .collect();

    tracing::debug!(
        input = cards.len(),
        output = matched.len(),
        field_tokens = filter.query.fields.len(),
        text_terms = filter.query.terms.len(),
        active_facets = filters.active_count(),
        pinned = pinned_ids.len(),
        "filtered cards"
    );
    matched
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

fn list_accepts(list: &[String], value: &str) -> bool {
    list.is_empty() || list.iter().any(|v| v == value)
}

fn story_accepts(stories: &[String], story: Option<&str>) -> bool {
    stories.is_empty() || story.is_some_and(|s| stories.iter().any(|v| v == s))
}

fn subtypes_accept(selected: &[String], subtypes: &[String]) -> bool {
    selected.is_empty() || subtypes.iter().any(|s| selected.contains(s))
}

/// Color facet. No-ink cards skip color matching and are gated by
/// `include_no_ink` alone.
fn color_accepts(options: &FilterOptions, card: &Card) -> bool {
    if card.has_no_ink() {
        return options.include_no_ink;
    }
    let selected = &options.colors;
    let is_selected = |ink: &str| selected.iter().any(|s| s.eq_ignore_ascii_case(ink));

    match options.color_match_mode {
        ColorMatchMode::Any => {
            if selected.is_empty() {
                return true;
            }
            let color = card.color.to_lowercase();
            selected.iter().any(|s| color.contains(&s.to_lowercase()))
        }
        ColorMatchMode::Only => {
            if selected.is_empty() {
                return true;
            }
            if !card.is_dual_ink() {
                return is_selected(&card.color);
            }
            // A single selection never admits a dual-ink card.
            selected.len() >= 2 && card.inks().all(is_selected)
        }
        ColorMatchMode::DualOnly => {
            if !card.color.contains(DUAL_INK_SEPARATOR) {
                return false;
            }
            match selected.len() {
                0 => true,
                1 => card.inks().any(is_selected),
                2 => {
                    let inks: Vec<&str> = card.inks().collect();
                    inks.len() == 2
                        && inks.iter().copied().all(is_selected)
                        && !inks[0].eq_ignore_ascii_case(inks[1])
                }
                _ => false,
            }
        }
    }
}

fn ownership_accepts<L>(options: &FilterOptions, card_id: u32, lookup: &L) -> bool
where
    L: OwnershipLookup + ?Sized,
{
    if options.ownership == OwnershipFilter::All && options.owned_quantity.is_none() {
        return true;
    }
    let total = lookup.ownership(card_id).total;
    let owned_ok = match options.ownership {
        OwnershipFilter::All => true,
        OwnershipFilter::Owned => total > 0,
        OwnershipFilter::NotOwned => total == 0,
    };
    owned_ok && options.owned_quantity.map_or(true, |q| q.accepts(total))
}
