//! The Unicode-range token (`U+XXXX` / `U+XXXX-YYYY`).

use crate::codepoint::{self, MAX_CODE_POINT};
use crate::error::WcssError;

/// A fully materialized Unicode code-point range.
///
/// Construction enumerates every selected code point in ascending order
/// and stores its encoded UTF-16 form. Out-of-range bounds degrade rather
/// than fail: a start past [`MAX_CODE_POINT`] yields an empty range, an
/// end past it is clamped down, and an inverted range selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeToken {
    selected: Vec<Vec<u16>>,
}

impl RangeToken {
    /// Builds a range token from hexadecimal bounds.
    ///
    /// `start` and `end` come from the scanner as bare hex digit runs,
    /// without the `U+` prefix. With no `end`, the range holds exactly the
    /// start code point. Non-hexadecimal input is a syntax error; a range
    /// that would enumerate through the surrogate band propagates the
    /// codec's rejection.
    pub fn new(start: &str, end: Option<&str>) -> Result<Self, WcssError> {
        let index = parse_hex(start)?;

        if index > MAX_CODE_POINT {
            return Ok(Self {
                selected: Vec::new(),
            });
        }

        let selected = match end {
            Some(end) => {
                let mut last = parse_hex(end)?;
                if last > MAX_CODE_POINT {
                    log::warn!(
                        "unicode-range end {:#x} clamped to {:#x}",
                        last,
                        MAX_CODE_POINT
                    );
                    last = MAX_CODE_POINT;
                }
                let mut list = Vec::new();
                for code_point in index..=last {
                    list.push(codepoint::encode(code_point)?);
                }
                list
            }
            None => vec![codepoint::encode(index)?],
        };

        Ok(Self { selected })
    }

    /// True when the range selects no code points.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The encoded form of every selected code point, in ascending order.
    pub fn selected(&self) -> &[Vec<u16>] {
        &self.selected
    }

    /// Canonical re-serialization: empty text for an empty range,
    /// `#<hex>` for a single code point, `#<hex>-#<hex>` for a span.
    ///
    /// The bounds are re-derived by decoding the first and last encoded
    /// entries rather than kept from construction.
    pub fn to_value(&self) -> String {
        match self.bounds() {
            None => String::new(),
            Some((start, end)) if start == end => format!("#{:x}", start),
            Some((start, end)) => format!("#{:x}-#{:x}", start, end),
        }
    }

    fn bounds(&self) -> Option<(u32, u32)> {
        let start = codepoint::decode(self.selected.first()?, 0).ok()?;
        let end = codepoint::decode(self.selected.last()?, 0).ok()?;
        Some((start, end))
    }
}

fn parse_hex(digits: &str) -> Result<u32, WcssError> {
    u32::from_str_radix(digits, 16)
        .map_err(|_| WcssError::InvalidSyntax(format!("invalid hex digits in unicode-range: {}", digits)))
}
