//! Semantic CSS values and their canonical text forms.
//!
//! Values are what the property parser builds out of tokens: numbers,
//! lengths, colors, and ordered lists of values. Every variant renders
//! back to canonical CSS text through [`ToCss`].

pub mod color;
pub mod length;
pub mod list;

pub use color::{Color, ColorParseError};
pub use length::{Length, LengthUnit};
pub use list::{Separator, ValueList};

/// Canonical CSS text rendering.
///
/// Implementations produce the exact text a stylesheet writer would emit,
/// so `to_css` output can be written back out verbatim.
pub trait ToCss {
    fn to_css(&self) -> String;
}

/// A typed CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// A bare numeric literal.
    Number(f32),
    /// A length such as `12px` or `1.5em`.
    Length(Length),
    /// A color in any supported notation.
    Color(Color),
    /// An ordered, separator-tagged list of values.
    List(ValueList),
}

impl CssValue {
    /// True for the numeric literal zero.
    ///
    /// Zero doubles as a valid length shorthand, which is why typed length
    /// extraction treats it specially (see [`ValueList::to_length`]).
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(value) if *value == 0.0)
    }
}

impl ToCss for CssValue {
    fn to_css(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Length(length) => length.to_css(),
            Self::Color(color) => color.to_css(),
            Self::List(list) => list.to_css(),
        }
    }
}

/// Formats a number the way CSS serializes it: integral values print
/// without a fractional part.
pub(crate) fn format_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
