//! Length values and their units.

use std::fmt;

use super::{ToCss, format_number};

/// CSS length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Device-independent pixels.
    #[default]
    Px,
    /// Relative to the element's font size.
    Em,
    /// Relative to the root font size.
    Rem,
    /// Relative to the font's x-height.
    Ex,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Inches.
    In,
    /// Points (1/72 in).
    Pt,
    /// Picas (12 pt).
    Pc,
    /// Percentage of viewport width.
    Vw,
    /// Percentage of viewport height.
    Vh,
}

impl LengthUnit {
    /// The unit's CSS suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Ex => "ex",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Vw => "vw",
            Self::Vh => "vh",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A CSS length: a number with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    /// Zero pixels, the default substituted for omitted lengths.
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: LengthUnit::Px,
    };

    pub fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl ToCss for Length {
    fn to_css(&self) -> String {
        format!("{}{}", format_number(self.value), self.unit.suffix())
    }
}
