//! Integration tests for declarations and declaration blocks.

use cssel::parser::{Declaration, parse_declaration, parse_declaration_block};
use cssel::{Cursor, NoMatch};

// ============================================================================
// DECLARATIONS
// ============================================================================

#[test]
fn test_declaration_well_formed() {
    let mut cursor = Cursor::new("property: value42;");
    let declaration = parse_declaration(&mut cursor).unwrap();
    assert_eq!(declaration, Declaration::new("property", "value42"));
    assert!(cursor.is_eof());
}

#[test]
fn test_declaration_ill_formed() {
    let mut cursor = Cursor::new("prop= val_?");
    assert_eq!(parse_declaration(&mut cursor), Err(NoMatch));
}

#[test]
fn test_declaration_property_stays_consumed_without_colon() {
    let mut cursor = Cursor::new("prop= val_?");
    assert!(parse_declaration(&mut cursor).is_err());
    assert_eq!(cursor.remaining(), "= val_?");
}

#[test]
fn test_declarations_in_sequence() {
    let mut cursor = Cursor::new(
        "simple-prop: value42; \n\
         another: good-value; \n\
         yet-another: rgba(0, 1, 1, 1);",
    );

    assert_eq!(
        parse_declaration(&mut cursor).unwrap(),
        Declaration::new("simple-prop", "value42")
    );
    assert_eq!(
        parse_declaration(&mut cursor).unwrap(),
        Declaration::new("another", "good-value")
    );
    assert_eq!(
        parse_declaration(&mut cursor).unwrap(),
        Declaration::new("yet-another", "rgba(0, 1, 1, 1)")
    );
    assert!(cursor.is_eof());
}

#[test]
fn test_declaration_value_is_raw_text() {
    let mut cursor = Cursor::new("background:url(http://example.com/a.png) no-repeat ;");
    let declaration = parse_declaration(&mut cursor).unwrap();
    assert_eq!(declaration.property, "background");
    assert_eq!(declaration.value, "url(http://example.com/a.png) no-repeat ");
}

#[test]
fn test_declaration_requires_terminator() {
    let mut cursor = Cursor::new("color: red");
    assert_eq!(parse_declaration(&mut cursor), Err(NoMatch));
    // Property, colon and the whitespace after it are already consumed.
    assert_eq!(cursor.remaining(), "red");
}

#[test]
fn test_declaration_requires_value() {
    let mut cursor = Cursor::new("color: ;");
    assert_eq!(parse_declaration(&mut cursor), Err(NoMatch));
}

#[test]
fn test_declaration_requires_property() {
    for input in [": red;", "_color: red;", "9: red;"] {
        let mut cursor = Cursor::new(input);
        assert_eq!(parse_declaration(&mut cursor), Err(NoMatch), "{input}");
        assert_eq!(cursor.position(), 0);
    }
}

// ============================================================================
// DECLARATION BLOCKS
// ============================================================================

#[test]
fn test_block_two_declarations() {
    let mut cursor = Cursor::new("{ a: b; c: d; }");
    let block = parse_declaration_block(&mut cursor).unwrap();
    assert_eq!(
        block.rules,
        vec![Declaration::new("a", "b"), Declaration::new("c", "d")]
    );
    assert!(cursor.is_eof());
}

#[test]
fn test_block_empty() {
    for input in ["{}", "{   }", "  {\n}"] {
        let mut cursor = Cursor::new(input);
        let block = parse_declaration_block(&mut cursor).unwrap();
        assert!(block.rules.is_empty(), "{input:?}");
        assert!(cursor.is_eof());
    }
}

#[test]
fn test_block_multiline() {
    let mut cursor = Cursor::new(
        r#"{ simple-prop: value42;
             another: good-value;
             yet-another: rgba(0, 1, 1, 1);
           }"#,
    );
    let block = parse_declaration_block(&mut cursor).unwrap();
    assert_eq!(block.rules.len(), 3);
    assert_eq!(block.rules[2], Declaration::new("yet-another", "rgba(0, 1, 1, 1)"));
    assert!(cursor.is_eof());
}

#[test]
fn test_block_keeps_rules_before_malformed_declaration() {
    let mut cursor = Cursor::new(
        r#"{ simple-prop: value42;
             another: good-value;
             yet-another: rgba(0, 1, 1, 1);
             goodname =badval^
           }"#,
    );
    let block = parse_declaration_block(&mut cursor).unwrap();
    assert_eq!(block.rules.len(), 3);
    assert_eq!(block.rules[0], Declaration::new("simple-prop", "value42"));
    assert!(cursor.is_eof());
}

#[test]
fn test_block_discards_everything_after_malformed_declaration() {
    let mut cursor = Cursor::new("{ a: b; oops c: d; e: f; } rest");
    let block = parse_declaration_block(&mut cursor).unwrap();
    assert_eq!(block.rules, vec![Declaration::new("a", "b")]);
    assert_eq!(cursor.remaining(), " rest");
}

#[test]
fn test_block_last_declaration_without_semicolon_is_dropped() {
    let mut cursor = Cursor::new("{ a: b; c: d }");
    let block = parse_declaration_block(&mut cursor).unwrap();
    assert_eq!(block.rules, vec![Declaration::new("a", "b")]);
    assert!(cursor.is_eof());
}

#[test]
fn test_block_unclosed_fails() {
    let mut cursor = Cursor::new("  { a: b; c: d;");
    assert_eq!(parse_declaration_block(&mut cursor), Err(NoMatch));
    assert_eq!(cursor.remaining(), "{ a: b; c: d;");
}

#[test]
fn test_block_requires_open_brace() {
    let mut cursor = Cursor::new("a: b; }");
    assert_eq!(parse_declaration_block(&mut cursor), Err(NoMatch));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_block_leaves_following_input() {
    let mut cursor = Cursor::new("{ a: b; }{ c: d; }");
    let first = parse_declaration_block(&mut cursor).unwrap();
    let second = parse_declaration_block(&mut cursor).unwrap();
    assert_eq!(first.rules, vec![Declaration::new("a", "b")]);
    assert_eq!(second.rules, vec![Declaration::new("c", "d")]);
    assert!(cursor.is_eof());
}
