//! Integration tests for media descriptors and their modifiers.

use wcss::media::{CssMedium, InvertMedium, MediaQuery, Medium, OnlyMedium};
use wcss::parser::parse_medium;
use wcss::values::{CssValue, Length, ToCss};

// ============================================================================
// BASE MEDIUM
// ============================================================================

#[test]
fn test_plain_medium() {
    let medium = Medium::new("screen");
    assert!(medium.validate());
    assert_eq!(medium.to_css(), "screen");
}

#[test]
fn test_medium_without_type_serializes_to_nothing() {
    let medium = Medium::default();
    assert_eq!(medium.media_type(), None);
    assert_eq!(medium.to_css(), "");
}

#[test]
fn test_constraints_serialize_but_do_not_evaluate() {
    let mut medium = Medium::new("screen");
    medium.add_constraint("min-width", CssValue::Length(Length::px(100.0)));
    medium.add_constraint("monochrome", CssValue::Number(1.0));

    assert_eq!(medium.constraints().len(), 2);
    assert_eq!(
        medium.to_css(),
        "screen (min-width: 100px) and (monochrome: 1)"
    );
    // Evaluation is an open gap: recorded constraints never invalidate.
    assert!(medium.validate());
}

// ============================================================================
// MODIFIERS
// ============================================================================

#[test]
fn test_only_medium() {
    let only = OnlyMedium::new(Medium::new("screen"));
    assert_eq!(only.to_css(), "only screen");
    assert!(only.validate());
}

#[test]
fn test_invert_medium() {
    let not = InvertMedium::new(Medium::new("screen"));
    assert_eq!(not.to_css(), "not screen");
    assert!(!not.validate());
}

#[test]
fn test_modifiers_delegate_to_inner() {
    let mut inner = Medium::new("print");
    inner.add_constraint("min-width", CssValue::Length(Length::px(50.0)));
    let only = OnlyMedium::new(inner);
    assert_eq!(only.to_css(), "only print (min-width: 50px)");
}

// ============================================================================
// PARSING
// ============================================================================

#[test]
fn test_parse_plain_medium() {
    let (rest, query) = parse_medium("screen").unwrap();
    assert!(rest.is_empty());
    assert!(matches!(query, MediaQuery::Plain(_)));
    assert_eq!(query.to_css(), "screen");
    assert!(query.validate());
}

#[test]
fn test_parse_only_medium() {
    let (_, query) = parse_medium("only screen").unwrap();
    assert!(matches!(query, MediaQuery::Only(_)));
    assert_eq!(query.to_css(), "only screen");
    assert!(query.validate());
}

#[test]
fn test_parse_not_medium() {
    let (_, query) = parse_medium("not print").unwrap();
    assert!(matches!(query, MediaQuery::Invert(_)));
    assert_eq!(query.to_css(), "not print");
    assert!(!query.validate());
}

#[test]
fn test_parse_medium_lowercases_the_tag() {
    let (_, query) = parse_medium("ONLY Screen").unwrap();
    assert_eq!(query.to_css(), "only screen");
}

#[test]
fn test_parse_unknown_tag_is_kept() {
    // The recommended set is not enforced at this layer.
    let (_, query) = parse_medium("speech").unwrap();
    assert_eq!(query.medium().media_type(), Some("speech"));
}
