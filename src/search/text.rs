//! Text normalization and free-text matching.

use crate::models::Card;

/// Lowercase, drop every character that is neither alphanumeric nor
/// whitespace, and collapse whitespace runs to a single space.
///
/// ```rust
/// use lorcana_search::search::text::normalize;
/// assert_eq!(normalize("  Let's   GO!  "), "lets go");
/// assert_eq!(normalize("Amber-Steel"), "ambersteel");
/// ```
pub fn normalize(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the normalized free-text haystack for a card.
///
/// Covers name, version, story, type, rarity, color, subtypes, each
/// ability's name, effect and keyword, and the card's full text.
pub fn haystack(card: &Card) -> String {
    let mut parts: Vec<&str> = vec![card.name.as_str()];
    parts.extend(card.version.as_deref());
    parts.extend(card.story.as_deref());
    parts.push(card.card_type.as_str());
    parts.push(card.rarity.as_str());
    parts.push(card.color.as_str());
    parts.extend(card.subtypes.iter().map(String::as_str));
    for ability in &card.abilities {
        parts.extend(ability.name.as_deref());
        parts.extend(ability.effect.as_deref());
        parts.extend(ability.keyword.as_deref());
    }
    parts.extend(card.full_text.as_deref());
    normalize(&parts.join(" "))
}

/// `true` when every term is a substring of the card's haystack.
///
/// Terms are normalized here; an empty list matches every card.
pub fn matches_free_text<S: AsRef<str>>(card: &Card, terms: &[S]) -> bool {
    let normalized: Vec<String> = terms.iter().map(|t| normalize(t.as_ref())).collect();
    matches_normalized_terms(card, &normalized)
}

/// Like [`matches_free_text`] for terms that are already normalized.
pub(crate) fn matches_normalized_terms(card: &Card, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let haystack = haystack(card);
    terms.iter().all(|term| haystack.contains(term.as_str()))
}
