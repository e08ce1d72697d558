//! Lexical tokens produced by scanning CSS text.
//!
//! The scanner itself lives elsewhere; this module defines the closed set
//! of token shapes it produces. Tokens are immutable once constructed and
//! carry their normalized payload; [`CssToken::to_value`] renders the
//! canonical text the token stands for.
//!
//! The one specialized shape is [`RangeToken`], which expands a
//! `unicode-range` production into every selected code point.

pub mod range;

pub use range::RangeToken;

use crate::values::format_number;

/// A lexical CSS token.
#[derive(Debug, Clone, PartialEq)]
pub enum CssToken {
    /// A single punctuation or delimiter character (`{`, `:`, `+`, ...).
    Delim(char),
    /// An identifier such as a property name or keyword.
    Ident(String),
    /// A quoted string, stored with the quotes stripped.
    Str(String),
    /// A numeric literal.
    Number(f32),
    /// A number with a unit suffix, e.g. `12px`.
    Dimension { value: f32, unit: String },
    /// A Unicode range, e.g. `U+0400-04FF`.
    Range(RangeToken),
}

impl CssToken {
    /// Canonical text form of the token.
    pub fn to_value(&self) -> String {
        match self {
            Self::Delim(c) => c.to_string(),
            Self::Ident(name) => name.clone(),
            Self::Str(text) => format!("\"{}\"", text),
            Self::Number(value) => format_number(*value),
            Self::Dimension { value, unit } => format!("{}{}", format_number(*value), unit),
            Self::Range(range) => range.to_value(),
        }
    }
}
