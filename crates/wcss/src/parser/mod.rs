//! Text parsers for tokens, values, and media descriptors.
//!
//! The surrounding engine hands this layer raw CSS fragments; the parsers
//! here turn them into the typed objects the rest of the crate defines:
//!
//! - [`parse_unicode_range`]: `U+XXXX` / `U+XXXX-YYYY` literals (with
//!   `?` wildcards) into [`RangeToken`]s
//! - [`parse_medium`]: `screen`, `only screen`, `not print` into the
//!   medium family
//! - [`parse_value`] / [`parse_value_list`]: property value text into
//!   typed values
//!
//! ## Submodules
//!
//! - [`units`]: numeric literals and lengths
//! - [`values`]: colors, generic values, and value lists

pub mod units;
pub mod values;

pub use units::{parse_length, parse_number};
pub use values::{parse_color, parse_ident, parse_value, parse_value_list};

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::{char, multispace1},
    combinator::opt,
    sequence::{preceded, terminated},
};

use crate::media::{InvertMedium, MediaQuery, Medium, OnlyMedium};
use crate::tokens::RangeToken;

/// Parses a unicode-range literal: `U+XXXX`, `U+XXXX-YYYY`, or the
/// wildcard form `U+4??` (equivalent to `U+400-4FF`).
pub fn parse_unicode_range(input: &str) -> IResult<&str, RangeToken> {
    let input = input.trim_start();
    let (input, _) = tag_no_case("u+")(input)?;
    let (input, digits) = take_while_m_n(0, 6, |c: char| c.is_ascii_hexdigit())(input)?;
    let (input, wildcards) = take_while_m_n(0, 6 - digits.len(), |c: char| c == '?')(input)?;

    if digits.is_empty() && wildcards.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::HexDigit,
        )));
    }

    if !wildcards.is_empty() {
        // Each wildcard digit spans its full hex range.
        let start = format!("{}{}", digits, "0".repeat(wildcards.len()));
        let end = format!("{}{}", digits, "f".repeat(wildcards.len()));
        let token = RangeToken::new(&start, Some(&end)).map_err(|_| {
            nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Verify))
        })?;
        return Ok((input, token));
    }

    let (input, end) = opt(preceded(
        char('-'),
        take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
    ))(input)?;

    let token = RangeToken::new(digits, end).map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Verify))
    })?;
    Ok((input, token))
}

/// Parses a media descriptor: `screen`, `only screen`, `not print`.
///
/// The type tag is lowercased but otherwise free-form; unknown tags are
/// kept as written in the stylesheet.
pub fn parse_medium(input: &str) -> IResult<&str, MediaQuery> {
    let input = input.trim_start();
    let (input, modifier) = opt(alt((
        terminated(tag_no_case("only"), multispace1),
        terminated(tag_no_case("not"), multispace1),
    )))(input)?;
    let (input, name) = values::parse_ident(input)?;
    let medium = Medium::new(name.to_lowercase());

    let query = match modifier.map(str::to_lowercase).as_deref() {
        Some("only") => MediaQuery::Only(OnlyMedium::new(medium)),
        Some("not") => MediaQuery::Invert(InvertMedium::new(medium)),
        _ => MediaQuery::Plain(medium),
    };

    Ok((input, query))
}
