//! Tokenizer tests.

use lorcana_search::search::{tokenize, Field, FieldToken, Operator, Token};

fn field(name: &str, operator: Operator, value: &str) -> Token {
    Token::Field(FieldToken {
        name: name.to_string(),
        field: Field::from_name(name),
        operator,
        value: value.to_string(),
    })
}

fn text(value: &str) -> Token {
    Token::Text(value.to_string())
}

// ---------------------------------------------------------------------------
// Basic splitting
// ---------------------------------------------------------------------------

#[test]
fn empty_query_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
}

#[test]
fn free_text_words_become_text_tokens() {
    assert_eq!(tokenize("  brave   tailor "), vec![text("brave"), text("tailor")]);
}

#[test]
fn mixed_query_keeps_token_order() {
    let tokens = tokenize("cost>3 amber ink:steel");
    assert_eq!(
        tokens,
        vec![
            field("cost", Operator::Greater, "3"),
            text("amber"),
            field("ink", Operator::Contains, "steel"),
        ]
    );
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[test]
fn every_operator_is_recognized() {
    let cases = [
        ("cost:5", Operator::Contains),
        ("cost=5", Operator::Equals),
        ("cost>5", Operator::Greater),
        ("cost<5", Operator::Less),
        ("cost>=5", Operator::GreaterOrEqual),
        ("cost<=5", Operator::LessOrEqual),
        ("cost!=5", Operator::NotEquals),
        ("cost!:5", Operator::NotContains),
    ];
    for (query, operator) in cases {
        assert_eq!(tokenize(query), vec![field("cost", operator, "5")], "{}", query);
    }
}

#[test]
fn two_character_operators_win_over_prefixes() {
    match &tokenize("lore>=2")[0] {
        Token::Field(t) => {
            assert_eq!(t.operator, Operator::GreaterOrEqual);
            assert_eq!(t.value, "2");
        }
        other => panic!("expected field token, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Value acceptance
// ---------------------------------------------------------------------------

#[test]
fn single_letter_value_is_free_text() {
    assert_eq!(tokenize("a:b"), vec![text("a:b")]);
    assert_eq!(tokenize("name:x"), vec![text("name:x")]);
}

#[test]
fn single_digit_value_is_accepted() {
    assert_eq!(tokenize("cost:1"), vec![field("cost", Operator::Contains, "1")]);
}

#[test]
fn quoted_single_character_is_accepted() {
    assert_eq!(tokenize(r#"name:"x""#), vec![field("name", Operator::Contains, "x")]);
}

#[test]
fn boolean_words_are_accepted() {
    assert_eq!(
        tokenize("inkable:no"),
        vec![field("inkable", Operator::Contains, "no")]
    );
    assert_eq!(
        tokenize("inkwell:YES"),
        vec![field("inkwell", Operator::Contains, "YES")]
    );
}

#[test]
fn empty_value_is_free_text() {
    assert_eq!(tokenize("cost:"), vec![text("cost:")]);
    assert_eq!(tokenize("cost>="), vec![text("cost>=")]);
}

#[test]
fn segment_without_field_name_is_free_text() {
    assert_eq!(tokenize(":amber"), vec![text(":amber")]);
    assert_eq!(tokenize(">3"), vec![text(">3")]);
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[test]
fn quoted_value_keeps_spaces_and_drops_quotes() {
    assert_eq!(
        tokenize(r#"name:"Mickey Mouse" cost<3"#),
        vec![
            field("name", Operator::Contains, "Mickey Mouse"),
            field("cost", Operator::Less, "3"),
        ]
    );
}

#[test]
fn quoted_free_text_is_one_term() {
    assert_eq!(
        tokenize(r#""let it go" frozen"#),
        vec![text("let it go"), text("frozen")]
    );
}

#[test]
fn empty_quotes_produce_no_token() {
    assert!(tokenize(r#""""#).is_empty());
}

// ---------------------------------------------------------------------------
// Field resolution
// ---------------------------------------------------------------------------

#[test]
fn unknown_fields_are_still_field_tokens() {
    match &tokenize("power:12")[0] {
        Token::Field(t) => {
            assert_eq!(t.name, "power");
            assert_eq!(t.field, None);
        }
        other => panic!("expected field token, got {:?}", other),
    }
}

#[test]
fn field_names_resolve_case_insensitively_with_aliases() {
    let cases = [
        ("INK:amber", Field::Color),
        ("Color:amber", Field::Color),
        ("inkable:yes", Field::Inkwell),
        ("franchise:frozen", Field::Story),
        ("subtype:hero", Field::Subtypes),
        ("abilities:evasive", Field::Ability),
        ("text:evasive", Field::Ability),
    ];
    for (query, expected) in cases {
        match &tokenize(query)[0] {
            Token::Field(t) => assert_eq!(t.field, Some(expected), "{}", query),
            other => panic!("expected field token for {}, got {:?}", query, other),
        }
    }
}
