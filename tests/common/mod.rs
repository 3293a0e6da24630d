//! Shared test fixtures for the card search integration tests.
//!
//! Provides `sample_cards()`, a small catalog covering every ink layout
//! (single, dual, none), all card types and optional stats, plus helpers for
//! building ad-hoc cards and a sample collection.

#![allow(dead_code)]

use lorcana_search::models::{CardType, Rarity};
use lorcana_search::{Card, Collection};

pub const ELSA: u32 = 1;
pub const BEAST_ALLY: u32 = 2;
pub const MICKEY: u32 = 3;
pub const LET_IT_GO: u32 = 4;
pub const INKCASTER: u32 = 5;
pub const PRIDE_LANDS: u32 = 6;
pub const HADES: u32 = 7;
pub const STITCH: u32 = 8;
pub const GOOFY: u32 = 9;

pub fn sample_cards() -> Vec<Card> {
    let cards = serde_json::json!([
        {
            "id": 1,
            "name": "Elsa",
            "version": "Snow Queen",
            "fullName": "Elsa - Snow Queen",
            "setCode": "1",
            "number": 42,
            "rarity": "Legendary",
            "color": "Sapphire-Amethyst",
            "cost": 5,
            "type": "Character",
            "strength": 4,
            "willpower": 6,
            "lore": 2,
            "inkwell": true,
            "abilities": [
                { "name": "FREEZE", "effect": "Exert chosen opposing character." }
            ],
            "subtypes": ["Storyborn", "Hero", "Queen", "Sorcerer"],
            "story": "Frozen"
        },
        {
            "id": 2,
            "name": "Beast Ally",
            "fullName": "Beast Ally",
            "setCode": "1",
            "number": 3,
            "rarity": "Common",
            "color": "Amber",
            "cost": 2,
            "type": "Character",
            "strength": 2,
            "willpower": 3,
            "lore": 1,
            "inkwell": true,
            "subtypes": ["Storyborn", "Ally"],
            "story": "Beauty and the Beast"
        },
        {
            "id": 3,
            "name": "Mickey Mouse",
            "version": "Brave Little Tailor",
            "fullName": "Mickey Mouse - Brave Little Tailor",
            "setCode": "1",
            "number": 115,
            "rarity": "Legendary",
            "color": "Steel",
            "cost": 8,
            "type": "Character",
            "strength": 5,
            "willpower": 5,
            "lore": 4,
            "inkwell": false,
            "abilities": [
                {
                    "keyword": "Evasive",
                    "reminderText": "(Only characters with Evasive can challenge this character.)"
                }
            ],
            "subtypes": ["Storyborn", "Hero"],
            "story": "Mickey Mouse & Friends"
        },
        {
            "id": 4,
            "name": "Let It Go",
            "fullName": "Let It Go",
            "setCode": "1",
            "number": 62,
            "rarity": "Rare",
            "color": "Sapphire",
            "cost": 5,
            "type": "Action",
            "inkwell": true,
            "subtypes": ["Song"],
            "story": "Frozen",
            "fullText": "Put chosen character into their player's inkwell facedown and exerted."
        },
        {
            "id": 5,
            "name": "Hidden Inkcaster",
            "fullName": "Hidden Inkcaster",
            "setCode": "2",
            "number": 166,
            "rarity": "Uncommon",
            "color": "Sapphire",
            "cost": 1,
            "type": "Item",
            "inkwell": true,
            "flavorText": "All it takes is a little imagination."
        },
        {
            "id": 6,
            "name": "Pride Lands",
            "version": "Pride Rock",
            "fullName": "Pride Lands - Pride Rock",
            "setCode": "3",
            "number": 204,
            "rarity": "Rare",
            "color": "Steel",
            "cost": 2,
            "type": "Location",
            "willpower": 7,
            "lore": 2,
            "inkwell": true,
            "story": "The Lion King"
        },
        {
            "id": 7,
            "name": "Hades",
            "version": "Double Dealer",
            "fullName": "Hades - Double Dealer",
            "setCode": "9",
            "number": 220,
            "rarity": "Enchanted",
            "color": "Amber-Steel",
            "cost": 4,
            "type": "Character",
            "strength": 3,
            "willpower": 4,
            "lore": 1,
            "inkwell": false,
            "subtypes": ["Storyborn", "Villain", "Deity"],
            "story": "Hercules"
        },
        {
            "id": 8,
            "name": "Stitch",
            "version": "Rock Star",
            "fullName": "Stitch - Rock Star",
            "setCode": "P1",
            "number": 23,
            "rarity": "Special",
            "color": "Steel-Ruby",
            "cost": 6,
            "type": "Character",
            "strength": 3,
            "willpower": 5,
            "lore": 3,
            "inkwell": true,
            "subtypes": ["Floodborn", "Alien"],
            "story": "Lilo & Stitch",
            "promoGrouping": "P1"
        },
        {
            "id": 9,
            "name": "Goofy",
            "version": "Quest Guide",
            "fullName": "Goofy - Quest Guide",
            "setCode": "Q1",
            "number": 7,
            "rarity": "Common",
            "color": "",
            "cost": 3,
            "type": "Character",
            "strength": 2,
            "willpower": 4,
            "inkwell": false,
            "story": "Mickey Mouse & Friends"
        }
    ]);
    serde_json::from_value(cards).unwrap()
}

/// A minimal card; adjust fields with struct update syntax in tests.
pub fn card(id: u32, name: &str) -> Card {
    Card {
        id,
        name: name.to_string(),
        version: None,
        full_name: name.to_string(),
        set_code: "1".to_string(),
        number: id,
        rarity: Rarity::Common,
        color: "Amber".to_string(),
        cost: 1,
        card_type: CardType::Character,
        strength: None,
        willpower: None,
        lore: None,
        inkwell: true,
        abilities: Vec::new(),
        flavor_text: None,
        subtypes: Vec::new(),
        story: None,
        promo_grouping: None,
        full_text: None,
    }
}

pub fn sample_collection() -> Collection {
    let mut collection = Collection::new();
    collection.add(ELSA, 2, 0).add(MICKEY, 0, 1).add(STITCH, 4, 0);
    collection
}

pub fn ids(cards: &[&Card]) -> Vec<u32> {
    cards.iter().map(|c| c.id).collect()
}

pub fn names(cards: &[&Card]) -> Vec<String> {
    cards.iter().map(|c| c.name.clone()).collect()
}
