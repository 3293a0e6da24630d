//! Conversion between a raw query string and removable field "bubbles".
//!
//! The interactive search box shows every completed `field:value` segment as
//! a chip with its own id, next to the free text the user is still typing.
//! [`to_bubbles`] and [`to_query`] convert between the two representations;
//! [`QueryEditor`] holds the editing state.

use std::fmt;

use crate::search::field::{Field, Operator};
use crate::search::tokenizer::{
    accepts_value, has_open_quote, parse_field_segment, segment_spans, tokenize, FieldToken,
    Token,
};

// ---------------------------------------------------------------------------
// BubbleId
// ---------------------------------------------------------------------------

/// Session-local bubble identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BubbleId(u64);

impl fmt::Display for BubbleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bubble-{}", self.0)
    }
}

/// Monotonic id source. One per editing session.
#[derive(Debug, Default)]
pub struct BubbleIds {
    next: u64,
}

impl BubbleIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> BubbleId {
        let id = BubbleId(self.next);
        self.next += 1;
        id
    }
}

// ---------------------------------------------------------------------------
// Bubble
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub id: BubbleId,
    /// Field name as the user typed it (aliases are kept).
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Bubble {
    fn from_token(id: BubbleId, token: FieldToken) -> Self {
        Self {
            id,
            field: token.name,
            operator: token.operator,
            value: token.value,
        }
    }

    /// Render as a query segment, quoting the value when it would not
    /// survive re-tokenizing bare.
    pub fn to_query_segment(&self) -> String {
        let value = if needs_quotes(&self.value) {
            format!("\"{}\"", self.value)
        } else {
            self.value.clone()
        };
        format!("{}{}{}", self.field, self.operator, value)
    }
}

fn needs_quotes(value: &str) -> bool {
    value.chars().any(char::is_whitespace) || !accepts_value(value, false)
}

/// Quote free-text terms that would otherwise split or parse as fields.
fn quote_text_term(term: &str) -> String {
    if term.chars().any(char::is_whitespace) || parse_field_segment(term).is_some() {
        format!("\"{}\"", term)
    } else {
        term.to_string()
    }
}

// ---------------------------------------------------------------------------
// Query <-> bubbles
// ---------------------------------------------------------------------------

/// Field bubbles plus the free text left over from a query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleSplit {
    pub bubbles: Vec<Bubble>,
    pub remaining_text: String,
}

/// Split a query into one bubble per field token and the remaining text.
pub fn to_bubbles(query: &str, ids: &mut BubbleIds) -> BubbleSplit {
    let mut split = BubbleSplit::default();
    let mut text_terms: Vec<String> = Vec::new();

    for token in tokenize(query) {
        match token {
            Token::Field(field) => split.bubbles.push(Bubble::from_token(ids.next_id(), field)),
            Token::Text(term) => text_terms.push(quote_text_term(&term)),
        }
    }
    split.remaining_text = text_terms.join(" ");
    split
}

/// Serialize bubbles, in order, followed by the remaining text.
pub fn to_query(bubbles: &[Bubble], remaining_text: &str) -> String {
    let mut parts: Vec<String> = bubbles.iter().map(Bubble::to_query_segment).collect();
    let text = remaining_text.trim();
    if !text.is_empty() {
        parts.push(text.to_string());
    }
    parts.join(" ").trim().to_string()
}

// ---------------------------------------------------------------------------
// Interactive helpers
// ---------------------------------------------------------------------------

/// A field segment found at the end of partial input.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailingField {
    pub token: FieldToken,
    /// Input before the trailing segment, right-trimmed.
    pub preceding: String,
}

/// Parse the last segment of `input` as a field token.
pub fn extract_last_field_value(input: &str) -> Option<TrailingField> {
    let input = input.trim_end();
    let last = segment_spans(input).pop()?;
    let token = parse_field_segment(&input[last.clone()])?;
    Some(TrailingField {
        token,
        preceding: input[..last.start].trim_end().to_string(),
    })
}

/// `true` once the user has finished typing a known `field<op>value`
/// segment, signalled by trailing whitespace outside any quotes.
///
/// Values with an inner double quote stay in the text input: the query
/// syntax has no escape that would let such a bubble serialize back.
pub fn should_create_bubble(input: &str) -> bool {
    if !input.ends_with(char::is_whitespace) || has_open_quote(input) {
        return false;
    }
    extract_last_field_value(input)
        .is_some_and(|t| t.token.field.is_some() && !t.token.value.contains('"'))
}

// ---------------------------------------------------------------------------
// QueryEditor
// ---------------------------------------------------------------------------

/// Editing state of the bubble search box.
#[derive(Debug, Default)]
pub struct QueryEditor {
    ids: BubbleIds,
    bubbles: Vec<Bubble>,
    input: String,
}

impl QueryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing query, e.g. one restored from a URL.
    pub fn from_query(query: &str) -> Self {
        let mut ids = BubbleIds::new();
        let split = to_bubbles(query, &mut ids);
        Self {
            ids,
            bubbles: split.bubbles,
            input: split.remaining_text,
        }
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    /// Replace the free-text input. When it ends in a completed known field
    /// segment, that segment becomes a bubble and the input keeps only the
    /// text before it.
    pub fn input(&mut self, text: &str) -> Option<BubbleId> {
        if should_create_bubble(text) {
            if let Some(trailing) = extract_last_field_value(text) {
                let id = self.ids.next_id();
                self.bubbles.push(Bubble::from_token(id, trailing.token));
                self.input = trailing.preceding;
                tracing::debug!(bubble = %id, count = self.bubbles.len(), "created bubble");
                return Some(id);
            }
        }
        self.input = text.to_string();
        None
    }

    /// Add a bubble directly, e.g. from a facet shortcut. Double quotes are
    /// dropped from `value`.
    pub fn push_bubble(&mut self, field: Field, operator: Operator, value: &str) -> BubbleId {
        let id = self.ids.next_id();
        self.bubbles.push(Bubble {
            id,
            field: field.as_str().to_string(),
            operator,
            value: value.replace('"', ""),
        });
        id
    }

    pub fn remove_bubble(&mut self, id: BubbleId) -> Option<Bubble> {
        let index = self.bubbles.iter().position(|b| b.id == id)?;
        Some(self.bubbles.remove(index))
    }

    /// Backspace on empty input removes the last bubble.
    pub fn pop_bubble(&mut self) -> Option<Bubble> {
        if self.input.is_empty() {
            self.bubbles.pop()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.bubbles.clear();
        self.input.clear();
    }

    /// The equivalent raw query string.
    pub fn query(&self) -> String {
        to_query(&self.bubbles, &self.input)
    }
}
