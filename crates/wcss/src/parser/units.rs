//! Numeric literal and length parsing.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

use crate::values::{Length, LengthUnit};

/// Parse a floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f32>(),
    )(input)
}

/// Parse the unit suffix (e.g., px, em, pt).
fn parse_unit_suffix(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        map(tag("px"), |_| LengthUnit::Px),
        map(tag("rem"), |_| LengthUnit::Rem),
        map(tag("em"), |_| LengthUnit::Em),
        map(tag("ex"), |_| LengthUnit::Ex),
        map(tag("cm"), |_| LengthUnit::Cm),
        map(tag("mm"), |_| LengthUnit::Mm),
        map(tag("in"), |_| LengthUnit::In),
        map(tag("pt"), |_| LengthUnit::Pt),
        map(tag("pc"), |_| LengthUnit::Pc),
        map(tag("vw"), |_| LengthUnit::Vw),
        map(tag("vh"), |_| LengthUnit::Vh),
    ))(input)
}

/// Parse a length: a number with a unit suffix (e.g., "12px", "1.5em").
///
/// A bare number is not a length here, not even zero; the zero-as-length
/// shorthand is resolved at extraction time, where the surrounding
/// context is known.
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let input = input.trim_start();
    let (input, value) = parse_number(input)?;
    let (input, unit) = parse_unit_suffix(input)?;

    Ok((input, Length::new(value, unit)))
}
