//! Ordered, separator-tagged value lists.

use super::{Color, CssValue, Length, ToCss};

/// Separator rendered between list entries.
///
/// The tag is fixed per list by whoever builds it; serialization never
/// infers it from the contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// Rendered as `" "` (the default).
    #[default]
    Space,
    /// Rendered as `", "`.
    Comma,
    /// Rendered as `" / "`.
    Slash,
}

impl Separator {
    /// The literal joining text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ", ",
            Self::Slash => " / ",
        }
    }
}

/// An ordered sequence of values with a fixed separator.
///
/// Insertion order is semantically significant: it defines the output
/// order of `to_css`. Lists only ever grow, and each list is owned by
/// whatever built it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueList {
    items: Vec<CssValue>,
    separator: Separator,
}

impl ValueList {
    /// An empty, space-separated list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A list seeded with one value.
    pub fn with_value(value: CssValue) -> Self {
        Self {
            items: vec![value],
            separator: Separator::default(),
        }
    }

    /// Same list with a different separator tag.
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn set_separator(&mut self, separator: Separator) {
        self.separator = separator;
    }

    /// Appends a value. No deduplication, no reordering.
    pub fn push(&mut self, value: CssValue) {
        self.items.push(value);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The value at `index`, or `None` past the end. Indexing is total:
    /// an out-of-bounds index is an answer, not a failure.
    pub fn get(&self, index: usize) -> Option<&CssValue> {
        self.items.get(index)
    }

    /// Typed length extraction with a required/tolerant switch.
    ///
    /// A length at `index` is returned as-is. The numeric literal zero is
    /// a valid length shorthand, so it downgrades the request to tolerant
    /// no matter what the caller passed. A tolerant request that finds
    /// nothing usable yields [`Length::ZERO`]; a required one yields
    /// `None`, leaving the accept/reject decision to the caller.
    pub fn to_length(&self, index: usize, mut required: bool) -> Option<Length> {
        match self.items.get(index) {
            Some(CssValue::Length(length)) => return Some(*length),
            Some(value) if value.is_zero() => required = false,
            _ => {}
        }

        if required { None } else { Some(Length::ZERO) }
    }

    /// Typed color extraction with a required/tolerant switch.
    ///
    /// Same contract as [`to_length`](Self::to_length) but without the
    /// zero shorthand; the tolerant default is [`Color::BLACK`].
    pub fn to_color(&self, index: usize, required: bool) -> Option<Color> {
        match self.items.get(index) {
            Some(CssValue::Color(color)) => Some(*color),
            _ if required => None,
            _ => Some(Color::BLACK),
        }
    }
}

impl ToCss for ValueList {
    fn to_css(&self) -> String {
        self.items
            .iter()
            .map(ToCss::to_css)
            .collect::<Vec<_>>()
            .join(self.separator.as_str())
    }
}
