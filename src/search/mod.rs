//! The structured search language.
//!
//! A query mixes `field<op>value` predicates with free-text words:
//!
//! ```text
//! cost>3 ink:amber "let it go" inkable:yes
//! ```
//!
//! Every field predicate and every free-text term must match (implicit AND).

pub mod bubble;
pub mod field;
pub mod text;
pub mod tokenizer;

pub use bubble::{
    extract_last_field_value, should_create_bubble, to_bubbles, to_query, Bubble, BubbleId,
    BubbleIds, BubbleSplit, QueryEditor, TrailingField,
};
pub use field::{matches_field, Field, FieldValue, Operator};
pub use text::{matches_free_text, normalize};
pub use tokenizer::{tokenize, FieldToken, Token};

use crate::models::Card;

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// A tokenized query, ready to be evaluated against many cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub fields: Vec<FieldToken>,
    /// Free-text terms, normalized.
    pub terms: Vec<String>,
}

impl SearchQuery {
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for token in tokenize(query) {
            match token {
                Token::Field(field) => parsed.fields.push(field),
                Token::Text(term) => parsed.terms.push(normalize(&term)),
            }
        }
        parsed
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.terms.is_empty()
    }

    pub fn matches(&self, card: &Card) -> bool {
        self.fields.iter().all(|f| f.matches(card))
            && text::matches_normalized_terms(card, &self.terms)
    }
}
