//! Typed field access and per-field match semantics.
//!
//! Every searchable attribute of a [`Card`] is a [`Field`] variant with a
//! typed accessor. Raw field names from a query are resolved once, in the
//! tokenizer, through [`Field::from_name`]; unknown names never reach the
//! matcher.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::models::Card;
use crate::search::text::normalize;

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

/// Comparison operator of a field token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `:` substring for text, equality for numbers and booleans.
    Contains,
    /// `=` exact (normalized) equality.
    Equals,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `!=`
    NotEquals,
    /// `!:`
    NotContains,
}

impl Operator {
    /// Operators ordered so two-character forms are tried before their
    /// one-character prefixes.
    const LONGEST_FIRST: [Operator; 8] = [
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::NotEquals,
        Operator::NotContains,
        Operator::Contains,
        Operator::Equals,
        Operator::Greater,
        Operator::Less,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Contains => ":",
            Operator::Equals => "=",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::NotEquals => "!=",
            Operator::NotContains => "!:",
        }
    }

    /// Match the longest operator at the start of `s`.
    ///
    /// Returns the operator and its length in bytes.
    pub fn parse_prefix(s: &str) -> Option<(Operator, usize)> {
        Self::LONGEST_FIRST
            .iter()
            .find(|op| s.starts_with(op.as_str()))
            .map(|op| (*op, op.as_str().len()))
    }

    pub fn is_negated(self) -> bool {
        matches!(self, Operator::NotEquals | Operator::NotContains)
    }

    /// Evaluate a numeric comparison from the ordering `attribute.cmp(value)`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Operator::Contains | Operator::Equals => ordering == Ordering::Equal,
            Operator::NotEquals | Operator::NotContains => ordering != Ordering::Equal,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::Less => ordering == Ordering::Less,
            Operator::GreaterOrEqual => ordering != Ordering::Less,
            Operator::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// The value of one card attribute, typed for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Bool(bool),
    /// The card has no value for an optional attribute.
    Missing,
}

impl<'a> FieldValue<'a> {
    fn text(s: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(s))
    }

    fn optional_text(s: Option<&'a str>) -> Self {
        s.map_or(FieldValue::Missing, FieldValue::text)
    }

    fn optional_number(n: Option<u32>) -> Self {
        n.map_or(FieldValue::Missing, |n| FieldValue::Number(f64::from(n)))
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A searchable card attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Version,
    FullName,
    Set,
    Number,
    Rarity,
    Color,
    Cost,
    Type,
    Strength,
    Willpower,
    Lore,
    Inkwell,
    Story,
    Subtypes,
    Ability,
    Flavor,
}

impl Field {
    pub const ALL: [Field; 18] = [
        Field::Id,
        Field::Name,
        Field::Version,
        Field::FullName,
        Field::Set,
        Field::Number,
        Field::Rarity,
        Field::Color,
        Field::Cost,
        Field::Type,
        Field::Strength,
        Field::Willpower,
        Field::Lore,
        Field::Inkwell,
        Field::Story,
        Field::Subtypes,
        Field::Ability,
        Field::Flavor,
    ];

    /// Resolve a field name as typed in a query, case-insensitively and
    /// including aliases. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Field> {
        let field = match name.to_ascii_lowercase().as_str() {
            "id" => Field::Id,
            "name" => Field::Name,
            "version" => Field::Version,
            "fullname" => Field::FullName,
            "set" => Field::Set,
            "number" => Field::Number,
            "rarity" => Field::Rarity,
            "color" | "ink" => Field::Color,
            "cost" => Field::Cost,
            "type" => Field::Type,
            "strength" => Field::Strength,
            "willpower" => Field::Willpower,
            "lore" => Field::Lore,
            "inkwell" | "inkable" => Field::Inkwell,
            "story" | "franchise" => Field::Story,
            "subtype" | "subtypes" => Field::Subtypes,
            "ability" | "abilities" | "text" => Field::Ability,
            "flavor" => Field::Flavor,
            _ => return None,
        };
        Some(field)
    }

    /// Canonical name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Version => "version",
            Field::FullName => "fullname",
            Field::Set => "set",
            Field::Number => "number",
            Field::Rarity => "rarity",
            Field::Color => "color",
            Field::Cost => "cost",
            Field::Type => "type",
            Field::Strength => "strength",
            Field::Willpower => "willpower",
            Field::Lore => "lore",
            Field::Inkwell => "inkwell",
            Field::Story => "story",
            Field::Subtypes => "subtypes",
            Field::Ability => "ability",
            Field::Flavor => "flavor",
        }
    }

    /// Read this attribute from a card.
    pub fn value(self, card: &Card) -> FieldValue<'_> {
        match self {
            Field::Id => FieldValue::Number(f64::from(card.id)),
            Field::Name => FieldValue::text(&card.name),
            Field::Version => FieldValue::optional_text(card.version.as_deref()),
            Field::FullName => FieldValue::text(&card.full_name),
            Field::Set => FieldValue::text(&card.set_code),
            Field::Number => FieldValue::Number(f64::from(card.number)),
            Field::Rarity => FieldValue::text(card.rarity.as_str()),
            Field::Color => FieldValue::text(&card.color),
            Field::Cost => FieldValue::Number(f64::from(card.cost)),
            Field::Type => FieldValue::text(card.card_type.as_str()),
            Field::Strength => FieldValue::optional_number(card.strength),
            Field::Willpower => FieldValue::optional_number(card.willpower),
            Field::Lore => FieldValue::optional_number(card.lore),
            Field::Inkwell => FieldValue::Bool(card.inkwell),
            Field::Story => FieldValue::optional_text(card.story.as_deref()),
            Field::Subtypes => {
                if card.subtypes.is_empty() {
                    FieldValue::Missing
                } else {
                    FieldValue::Text(Cow::Owned(card.subtypes.join(" ")))
                }
            }
            Field::Ability => FieldValue::Text(Cow::Owned(card.ability_text())),
            Field::Flavor => FieldValue::optional_text(card.flavor_text.as_deref()),
        }
    }

    /// Decide whether `card` satisfies `self <operator> value`.
    pub fn matches(self, card: &Card, operator: Operator, value: &str) -> bool {
        match self.value(card) {
            FieldValue::Missing => is_null_word(value),
            FieldValue::Text(attr) => match_text(&attr, operator, value),
            FieldValue::Number(attr) => match_number(attr, operator, value),
            FieldValue::Bool(attr) => match_bool(attr, operator, value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match a card against a raw field name. Unknown names never match.
pub fn matches_field(card: &Card, field: &str, operator: Operator, value: &str) -> bool {
    Field::from_name(field).is_some_and(|f| f.matches(card, operator, value))
}

// ---------------------------------------------------------------------------
// Per-type comparison
// ---------------------------------------------------------------------------

fn is_null_word(value: &str) -> bool {
    value.eq_ignore_ascii_case("null") || value.eq_ignore_ascii_case("none")
}

fn match_text(attr: &str, operator: Operator, value: &str) -> bool {
    let attr = normalize(attr);
    let value = normalize(value);
    match operator {
        Operator::Contains => attr.contains(&value),
        Operator::Equals => attr == value,
        Operator::NotEquals | Operator::NotContains => !attr.contains(&value),
        _ => false,
    }
}

fn match_number(attr: f64, operator: Operator, value: &str) -> bool {
    let Ok(value) = value.trim().parse::<f64>() else {
        return false;
    };
    attr.partial_cmp(&value)
        .is_some_and(|ordering| operator.eval_ordering(ordering))
}

fn match_bool(attr: bool, operator: Operator, value: &str) -> bool {
    let loose = value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes");
    match operator {
        Operator::Contains => attr == loose,
        Operator::Equals => attr == value.eq_ignore_ascii_case("true"),
        Operator::NotEquals | Operator::NotContains => attr != loose,
        _ => false,
    }
}
