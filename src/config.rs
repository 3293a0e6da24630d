use crate::models::{Rarity, SetInfo};

/// Rarities in ascending priority, used for rarity sorting and grouping.
pub const RARITY_ORDER: [Rarity; 7] = [
    Rarity::Common,
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::SuperRare,
    Rarity::Legendary,
    Rarity::Enchanted,
    Rarity::Special,
];

/// The six ink colors a card can be printed in.
pub const INK_COLORS: [&str; 6] = ["Amber", "Amethyst", "Emerald", "Ruby", "Sapphire", "Steel"];

/// Separator between the two halves of a dual-ink color string.
pub const DUAL_INK_SEPARATOR: char = '-';

/// Group label for cards without an ink color (Illumineer's Quest).
pub const NO_INK_LABEL: &str = "No Ink Color";

/// Group label for cards without a story.
pub const NO_STORY_LABEL: &str = "No Story";

pub fn default_sets() -> Vec<SetInfo> {
    [
        // Main sets, in release order
        ("1", "The First Chapter"),
        ("2", "Rise of the Floodborn"),
        ("3", "Into the Inklands"),
        ("4", "Ursula's Return"),
        ("5", "Shimmering Skies"),
        ("6", "Azurite Sea"),
        ("7", "Archazia's Island"),
        ("8", "Reign of Jafar"),
        ("9", "Fabled"),
        // Illumineer's Quest
        ("Q1", "Deep Trouble"),
    ]
    .into_iter()
    .map(|(code, name)| SetInfo::new(code, name))
    .collect()
}
