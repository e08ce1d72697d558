//! Value parsing: colors, generic values, and value lists.

use nom::{IResult, bytes::complete::take_while1};

use super::units::{parse_length, parse_number};
use crate::values::{Color, CssValue, Separator, ValueList};

/// Parses a CSS identifier (alphanumeric characters, dashes, and
/// underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parse a color value.
///
/// Handles hex (`#rgb`, `#rrggbb`, ...), `rgb()`/`rgba()`, named colors,
/// and `transparent`.
pub fn parse_color(input: &str) -> IResult<&str, Color> {
    let input = input.trim_start();
    let end = find_color_end(input);

    if end == 0 {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }

    match Color::parse(&input[..end]) {
        Ok(color) => Ok((&input[end..], color)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

/// Find the end of a color token, respecting parentheses.
/// For `rgb(255, 0, 0)` returns the index after the closing `)`.
/// For `red` or `#ff0000` returns the index at the first delimiter.
fn find_color_end(input: &str) -> usize {
    let mut paren_depth = 0;
    let mut end = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => paren_depth += 1,
            ')' => {
                paren_depth -= 1;
                if paren_depth == 0 {
                    return i + 1;
                }
            }
            // Stop at delimiters if we aren't inside parens
            ',' | '/' | ';' | '}' if paren_depth == 0 => return i,
            c if c.is_whitespace() && paren_depth == 0 => return i,
            _ => {}
        }
        end = i + c.len_utf8();
    }
    end
}

/// Parse a single typed value: a length, a bare number, or a color.
pub fn parse_value(input: &str) -> IResult<&str, CssValue> {
    let input = input.trim_start();

    if let Ok((remaining, length)) = parse_length(input) {
        return Ok((remaining, CssValue::Length(length)));
    }

    if let Ok((remaining, number)) = parse_number(input) {
        return Ok((remaining, CssValue::Number(number)));
    }

    let (remaining, color) = parse_color(input)?;
    Ok((remaining, CssValue::Color(color)))
}

/// Parse a run of values into a list.
///
/// The list's separator tag is fixed by the first delimiter actually
/// present in the text, and the rest of the run must keep using it; a
/// change of delimiter ends the list. A single value yields a one-element
/// space-separated list.
pub fn parse_value_list(input: &str) -> IResult<&str, ValueList> {
    let (mut input, first) = parse_value(input)?;
    let mut list = ValueList::with_value(first);
    let mut separator: Option<Separator> = None;

    loop {
        let (consumed, next) = lead_separator(input);
        let sep = match next {
            Some(sep) => sep,
            None => break,
        };
        if separator.is_some_and(|fixed| fixed != sep) {
            break;
        }

        let (rest, value) = match parse_value(&input[consumed..]) {
            Ok(parsed) => parsed,
            Err(_) => break,
        };

        if separator.is_none() {
            separator = Some(sep);
            list.set_separator(sep);
        }
        list.push(value);
        input = rest;
    }

    Ok((input, list))
}

/// Classifies the delimiter at the head of `input`, returning how much of
/// it to consume. Declaration terminators end the run.
fn lead_separator(input: &str) -> (usize, Option<Separator>) {
    let trimmed = input.trim_start();
    let consumed = input.len() - trimmed.len();

    match trimmed.chars().next() {
        Some(',') => (consumed + 1, Some(Separator::Comma)),
        Some('/') => (consumed + 1, Some(Separator::Slash)),
        Some(c) if consumed > 0 && c != ';' && c != '}' => (consumed, Some(Separator::Space)),
        _ => (0, None),
    }
}
