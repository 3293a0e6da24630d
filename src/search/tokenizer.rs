//! Query tokenizer.
//!
//! Splits a raw search string into [`Token`]s: `field<op>value` predicates
//! and free-text terms. Malformed predicates are never an error, they
//! degrade to free text.
//!
//! ```rust
//! use lorcana_search::search::{tokenize, Operator, Token};
//!
//! let tokens = tokenize(r#"cost>=3 name:"Mickey Mouse" brave"#);
//! assert_eq!(tokens.len(), 3);
//! match &tokens[0] {
//!     Token::Field(t) => assert_eq!(t.operator, Operator::GreaterOrEqual),
//!     Token::Text(_) => unreachable!(),
//! }
//! assert_eq!(tokens[2], Token::Text("brave".to_string()));
//! ```

use std::ops::Range;

use crate::models::Card;
use crate::search::field::{Field, Operator};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Field(FieldToken),
    Text(String),
}

/// A parsed `field<op>value` segment.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldToken {
    /// Field name exactly as typed.
    pub name: String,
    /// Resolved field, `None` when the name is unknown.
    pub field: Option<Field>,
    pub operator: Operator,
    /// Value with wrapping quotes removed.
    pub value: String,
}

impl FieldToken {
    /// Unknown fields match nothing.
    pub fn matches(&self, card: &Card) -> bool {
        self.field
            .is_some_and(|f| f.matches(card, self.operator, &self.value))
    }
}

// ---------------------------------------------------------------------------
// Tokenizing
// ---------------------------------------------------------------------------

pub fn tokenize(query: &str) -> Vec<Token> {
    let query = query.trim();
    segment_spans(query)
        .into_iter()
        .filter_map(|span| parse_segment(&query[span]))
        .collect()
}

/// Parse one whitespace-delimited segment. Segments that are empty once
/// their quotes are stripped produce no token.
pub(crate) fn parse_segment(segment: &str) -> Option<Token> {
    if let Some(token) = parse_field_segment(segment) {
        return Some(Token::Field(token));
    }
    let (text, _) = strip_quotes(segment);
    if text.is_empty() {
        None
    } else {
        Some(Token::Text(text.to_string()))
    }
}

/// Parse `<letters><operator><value>`, applying the value acceptance rules.
pub(crate) fn parse_field_segment(segment: &str) -> Option<FieldToken> {
    let name_len = segment
        .bytes()
        .take_while(u8::is_ascii_alphabetic)
        .count();
    if name_len == 0 {
        return None;
    }
    let (name, rest) = segment.split_at(name_len);
    let (operator, op_len) = Operator::parse_prefix(rest)?;
    let (value, quoted) = strip_quotes(&rest[op_len..]);
    if !accepts_value(value, quoted) {
        return None;
    }
    Some(FieldToken {
        name: name.to_string(),
        field: Field::from_name(name),
        operator,
        value: value.to_string(),
    })
}

/// A value is accepted when non-empty and at least one of: two or more
/// characters, quoted, numeric, or a boolean word.
pub(crate) fn accepts_value(value: &str, quoted: bool) -> bool {
    if value.is_empty() {
        return false;
    }
    quoted || value.chars().count() >= 2 || is_numeric(value) || is_bool_word(value)
}

fn is_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
        && value.parse::<f64>().is_ok()
}

fn is_bool_word(value: &str) -> bool {
    ["true", "false", "yes", "no"]
        .iter()
        .any(|w| value.eq_ignore_ascii_case(w))
}

/// Remove one pair of wrapping double quotes.
pub(crate) fn strip_quotes(s: &str) -> (&str, bool) {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        (&s[1..s.len() - 1], true)
    } else {
        (s, false)
    }
}

/// Byte ranges of the whitespace-separated segments of `s`. Whitespace
/// inside double quotes does not split.
pub(crate) fn segment_spans(s: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        }
        if c.is_whitespace() && !in_quotes {
            if let Some(begin) = start.take() {
                spans.push(begin..i);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(begin) = start {
        spans.push(begin..s.len());
    }
    spans
}

/// `true` when `s` contains an unterminated double quote.
pub(crate) fn has_open_quote(s: &str) -> bool {
    s.chars().filter(|c| *c == '"').count() % 2 == 1
}
