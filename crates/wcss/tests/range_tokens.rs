//! Integration tests for Unicode range tokens.
//!
//! Covers the tolerant bound handling:
//! - Start past the maximum code point: empty range, not an error
//! - End past the maximum: clamped down
//! - Inverted range: empty
//! - Canonical re-serialization: `#<hex>` / `#<hex>-#<hex>`

use wcss::codepoint;
use wcss::tokens::RangeToken;

// ============================================================================
// SINGLE CODE POINT
// ============================================================================

#[test]
fn test_single_code_point() {
    let range = RangeToken::new("41", None).unwrap();
    assert!(!range.is_empty());
    assert_eq!(range.selected().len(), 1);
    assert_eq!(range.selected()[0], vec![0x41]);
    assert_eq!(range.to_value(), "#41");
}

#[test]
fn test_single_supplementary_code_point() {
    let range = RangeToken::new("1F600", None).unwrap();
    assert_eq!(range.selected().len(), 1);
    // One code point, two units.
    assert_eq!(range.selected()[0].len(), 2);
    assert_eq!(range.to_value(), "#1f600");
}

// ============================================================================
// SPANS
// ============================================================================

#[test]
fn test_span_is_fully_materialized() {
    let range = RangeToken::new("10000", Some("10002")).unwrap();
    assert_eq!(range.selected().len(), 3);
    assert_eq!(range.to_value(), "#10000-#10002");
}

#[test]
fn test_span_entries_are_ascending() {
    let range = RangeToken::new("40", Some("44")).unwrap();
    let decoded: Vec<u32> = range
        .selected()
        .iter()
        .map(|units| codepoint::decode(units, 0).unwrap())
        .collect();
    assert_eq!(decoded, vec![0x40, 0x41, 0x42, 0x43, 0x44]);
}

#[test]
fn test_span_crossing_bmp_boundary() {
    // U+FFFE..=U+10001: two single-unit entries, two pairs.
    let range = RangeToken::new("FFFE", Some("10001")).unwrap();
    assert_eq!(range.selected().len(), 4);
    assert_eq!(range.selected()[0].len(), 1);
    assert_eq!(range.selected()[3].len(), 2);
    assert_eq!(range.to_value(), "#fffe-#10001");
}

// ============================================================================
// BOUND HANDLING
// ============================================================================

#[test]
fn test_start_past_maximum_is_empty() {
    let range = RangeToken::new("110000", None).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.to_value(), "");
}

#[test]
fn test_end_past_maximum_is_clamped() {
    let range = RangeToken::new("10FFFE", Some("120000")).unwrap();
    assert_eq!(range.selected().len(), 2);
    assert_eq!(range.to_value(), "#10fffe-#10ffff");
}

#[test]
fn test_inverted_range_is_empty() {
    let range = RangeToken::new("42", Some("40")).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.to_value(), "");
}

#[test]
fn test_hex_is_case_insensitive() {
    let lower = RangeToken::new("1f600", None).unwrap();
    let upper = RangeToken::new("1F600", None).unwrap();
    assert_eq!(lower, upper);
}

// ============================================================================
// REJECTIONS
// ============================================================================

#[test]
fn test_malformed_hex_is_an_error() {
    assert!(RangeToken::new("xyz", None).is_err());
    assert!(RangeToken::new("40", Some("xyz")).is_err());
    assert!(RangeToken::new("", None).is_err());
}

#[test]
fn test_range_through_surrogate_band_is_rejected() {
    // The codec refuses to encode surrogate code points, and a span that
    // enumerates through them propagates that refusal.
    assert!(RangeToken::new("D800", None).is_err());
    assert!(RangeToken::new("D7FF", Some("DC00")).is_err());
}
