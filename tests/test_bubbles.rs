//! Query <-> bubble conversion and interactive editor tests.

use lorcana_search::search::{
    extract_last_field_value, should_create_bubble, to_bubbles, to_query, tokenize, BubbleIds,
    Field, Operator, QueryEditor,
};

fn triples(query: &str) -> Vec<(String, Operator, String)> {
    let mut ids = BubbleIds::new();
    to_bubbles(query, &mut ids)
        .bubbles
        .into_iter()
        .map(|b| (b.field, b.operator, b.value))
        .collect()
}

// ---------------------------------------------------------------------------
// to_bubbles / to_query
// ---------------------------------------------------------------------------

#[test]
fn splits_fields_from_free_text() {
    let mut ids = BubbleIds::new();
    let split = to_bubbles("cost>3 brave ink:amber tailor", &mut ids);

    assert_eq!(split.bubbles.len(), 2);
    assert_eq!(split.bubbles[0].field, "cost");
    assert_eq!(split.bubbles[0].operator, Operator::Greater);
    assert_eq!(split.bubbles[0].value, "3");
    assert_eq!(split.bubbles[1].field, "ink");
    assert_eq!(split.remaining_text, "brave tailor");
}

#[test]
fn bubble_ids_are_unique_within_a_session() {
    let mut ids = BubbleIds::new();
    let first = to_bubbles("cost:1 cost:1", &mut ids);
    let second = to_bubbles("cost:1", &mut ids);

    assert_ne!(first.bubbles[0].id, first.bubbles[1].id);
    assert_ne!(first.bubbles[0].id, second.bubbles[0].id);
    assert_ne!(first.bubbles[1].id, second.bubbles[0].id);
    assert!(first.bubbles[0].id.to_string().starts_with("bubble-"));
}

#[test]
fn to_query_joins_bubbles_then_text() {
    let mut ids = BubbleIds::new();
    let split = to_bubbles("rarity:legendary cost<=4", &mut ids);
    assert_eq!(to_query(&split.bubbles, "  brave "), "rarity:legendary cost<=4 brave");
    assert_eq!(to_query(&split.bubbles, ""), "rarity:legendary cost<=4");
    assert_eq!(to_query(&[], ""), "");
}

#[test]
fn whitespace_values_are_quoted() {
    let mut ids = BubbleIds::new();
    let split = to_bubbles(r#"name:"Mickey Mouse""#, &mut ids);
    assert_eq!(split.bubbles[0].value, "Mickey Mouse");
    assert_eq!(to_query(&split.bubbles, ""), r#"name:"Mickey Mouse""#);
}

#[test]
fn short_quoted_values_stay_quoted() {
    let mut ids = BubbleIds::new();
    let split = to_bubbles(r#"name:"x""#, &mut ids);
    assert_eq!(to_query(&split.bubbles, ""), r#"name:"x""#);
}

#[test]
fn round_trip_reproduces_tokens() {
    let queries = [
        "cost>3 amber",
        r#"name:"Mickey Mouse" brave inkable:no"#,
        r#""let it go" story:frozen"#,
        r#"name:"x" "cost:5" lore!=2"#,
        "power:12 a:b ink!:steel",
    ];
    for query in queries {
        let mut ids = BubbleIds::new();
        let split = to_bubbles(query, &mut ids);
        let rebuilt = to_query(&split.bubbles, &split.remaining_text);

        assert_eq!(triples(&rebuilt), triples(query), "{}", query);

        let mut original = tokenize(query);
        let mut round = tokenize(&rebuilt);
        // bubbles come first after rebuilding; compare as sorted debug strings
        let key = |t: &lorcana_search::search::Token| format!("{:?}", t);
        original.sort_by_key(key);
        round.sort_by_key(key);
        assert_eq!(round, original, "{} -> {}", query, rebuilt);
    }
}

// ---------------------------------------------------------------------------
// Interactive helpers
// ---------------------------------------------------------------------------

#[test]
fn completed_known_field_creates_bubble() {
    assert!(should_create_bubble("rarity:Legendary "));
    assert!(should_create_bubble("brave cost>=3 "));
}

#[test]
fn incomplete_input_does_not_create_bubble() {
    // still typing
    assert!(!should_create_bubble("rarity:Legendary"));
    // no value yet
    assert!(!should_create_bubble("rarity: "));
    // unknown field
    assert!(!should_create_bubble("power:12 "));
    // plain text
    assert!(!should_create_bubble("brave "));
    // inside an open quote
    assert!(!should_create_bubble(r#"name:"Mickey "#));
    // quote closed
    assert!(should_create_bubble(r#"name:"Mickey Mouse" "#));
}

#[test]
fn extract_last_field_value_returns_preceding_text() {
    let trailing = extract_last_field_value("brave tailor cost<=4").unwrap();
    assert_eq!(trailing.token.name, "cost");
    assert_eq!(trailing.token.field, Some(Field::Cost));
    assert_eq!(trailing.token.operator, Operator::LessOrEqual);
    assert_eq!(trailing.token.value, "4");
    assert_eq!(trailing.preceding, "brave tailor");

    assert!(extract_last_field_value("cost<=4 brave").is_none());
    assert!(extract_last_field_value("").is_none());
}

// ---------------------------------------------------------------------------
// QueryEditor
// ---------------------------------------------------------------------------

#[test]
fn typing_a_completed_field_then_removing_it() {
    let mut editor = QueryEditor::new();
    let id = editor.input("rarity:Legendary ").unwrap();

    let bubble = &editor.bubbles()[0];
    assert_eq!(bubble.field, "rarity");
    assert_eq!(bubble.operator, Operator::Contains);
    assert_eq!(bubble.value, "Legendary");
    assert_eq!(editor.text(), "");
    assert_eq!(editor.query(), "rarity:Legendary");

    assert!(editor.remove_bubble(id).is_some());
    assert_eq!(editor.query(), "");
    assert!(editor.remove_bubble(id).is_none());
}

#[test]
fn typing_keeps_text_before_the_field() {
    let mut editor = QueryEditor::new();
    assert!(editor.input("brave").is_none());
    assert!(editor.input("brave cost>3").is_none());
    assert_eq!(editor.text(), "brave cost>3");

    assert!(editor.input("brave cost>3 ").is_some());
    assert_eq!(editor.text(), "brave");
    assert_eq!(editor.query(), "cost>3 brave");
}

#[test]
fn backspace_on_empty_input_pops_last_bubble() {
    let mut editor = QueryEditor::from_query("cost>3 ink:amber");
    assert_eq!(editor.bubbles().len(), 2);

    editor.input("x");
    assert!(editor.pop_bubble().is_none());

    editor.input("");
    let popped = editor.pop_bubble().unwrap();
    assert_eq!(popped.field, "ink");
    assert_eq!(editor.query(), "cost>3");
}

#[test]
fn push_bubble_uses_canonical_field_name() {
    let mut editor = QueryEditor::new();
    let a = editor.push_bubble(Field::Color, Operator::Contains, "Amber Steel");
    let b = editor.push_bubble(Field::Cost, Operator::GreaterOrEqual, "2");
    assert_ne!(a, b);
    assert_eq!(editor.query(), r#"color:"Amber Steel" cost>=2"#);

    editor.clear();
    assert!(editor.bubbles().is_empty());
    assert_eq!(editor.query(), "");
}

#[test]
fn from_query_keeps_free_text_as_input() {
    let editor = QueryEditor::from_query(r#"story:frozen "let it go""#);
    assert_eq!(editor.bubbles().len(), 1);
    assert_eq!(editor.text(), r#""let it go""#);
    assert_eq!(editor.query(), r#"story:frozen "let it go""#);
}

#[test]
fn value_with_inner_quote_stays_in_text_input() {
    let typed = "name:a\"b c\" ";
    assert!(!should_create_bubble(typed));

    let mut editor = QueryEditor::new();
    assert!(editor.input(typed).is_none());
    assert!(editor.bubbles().is_empty());
    assert_eq!(editor.text(), typed);
    assert_eq!(tokenize(&editor.query()), tokenize("name:a\"b c\""));
}

#[test]
fn push_bubble_drops_double_quotes() {
    let mut editor = QueryEditor::new();
    editor.push_bubble(Field::Name, Operator::Contains, "a\"b c");
    assert_eq!(editor.bubbles()[0].value, "ab c");
    assert_eq!(editor.query(), r#"name:"ab c""#);

    let reopened = QueryEditor::from_query(&editor.query());
    assert_eq!(reopened.bubbles()[0].value, "ab c");
    assert_eq!(reopened.query(), editor.query());
}
