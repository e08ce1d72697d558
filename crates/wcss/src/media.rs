//! Media descriptors: `screen`, `print`, and the `only` / `not` modifiers.
//!
//! A medium names the device class a rule applies to. Feature constraints
//! (`min-width: 100px` and friends) are recorded against the medium but
//! not yet evaluated; see [`Medium::add_constraint`] for the grammar an
//! eventual evaluator has to cover.

use crate::values::{CssValue, ToCss};

/// Media types from the CSS 2.1 recommendation. Tags are free-form at
/// this layer; this set is what stylesheets normally use.
pub const KNOWN_TYPES: &[&str] = &[
    "tv",
    "screen",
    "tty",
    "projection",
    "handheld",
    "print",
    "braille",
    "all",
];

/// Common contract of the medium family: every medium can say whether it
/// currently applies, and render itself back to CSS text via [`ToCss`].
pub trait CssMedium: ToCss {
    /// Whether the medium applies to the current device.
    fn validate(&self) -> bool;
}

/// A plain media descriptor with optional feature constraints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Medium {
    media_type: Option<String>,
    constraints: Vec<(String, CssValue)>,
}

impl Medium {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: Some(media_type.into()),
            constraints: Vec::new(),
        }
    }

    /// The device-class tag, e.g. `screen`.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Records a feature constraint for later evaluation.
    ///
    /// Evaluation is not implemented: recorded constraints serialize with
    /// the medium but [`validate`](CssMedium::validate) ignores them. The
    /// features an evaluator will have to understand:
    ///
    /// - `width`, `height`, `device-width`, `device-height` — length
    /// - `aspect-ratio`, `device-aspect-ratio` — ratio, e.g. `3/4`
    /// - `color`, `color-index`, `monochrome`, `grid` — integer
    /// - `resolution` — resolution
    /// - `orientation` — `portrait` | `landscape`
    /// - `scan` — `progressive` | `interlace`
    ///
    /// All but `orientation`, `scan`, and `grid` also come in `min-` and
    /// `max-` prefixed forms.
    pub fn add_constraint(&mut self, feature: impl Into<String>, value: CssValue) {
        let feature = feature.into();
        log::trace!("recording media constraint {} (not evaluated)", feature);
        self.constraints.push((feature, value));
    }

    /// The recorded constraints, in insertion order.
    pub fn constraints(&self) -> &[(String, CssValue)] {
        &self.constraints
    }
}

impl ToCss for Medium {
    fn to_css(&self) -> String {
        let constraints = self
            .constraints
            .iter()
            .map(|(feature, value)| format!("({}: {})", feature, value.to_css()))
            .collect::<Vec<_>>()
            .join(" and ");

        match (self.media_type.as_deref(), constraints.is_empty()) {
            (Some(media_type), true) => media_type.to_string(),
            (Some(media_type), false) => format!("{} {}", media_type, constraints),
            (None, true) => String::new(),
            (None, false) => constraints,
        }
    }
}

impl CssMedium for Medium {
    fn validate(&self) -> bool {
        // Constraints are recorded but not evaluated yet.
        true
    }
}

/// Wraps a medium so it serializes with the `only` prefix.
///
/// `only` exists to hide a query from legacy parsers; validity is
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OnlyMedium {
    pub inner: Medium,
}

impl OnlyMedium {
    pub fn new(inner: Medium) -> Self {
        Self { inner }
    }
}

impl ToCss for OnlyMedium {
    fn to_css(&self) -> String {
        format!("only {}", self.inner.to_css())
    }
}

impl CssMedium for OnlyMedium {
    fn validate(&self) -> bool {
        self.inner.validate()
    }
}

/// Wraps a medium so it serializes with the `not` prefix and inverts its
/// validity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvertMedium {
    pub inner: Medium,
}

impl InvertMedium {
    pub fn new(inner: Medium) -> Self {
        Self { inner }
    }
}

impl ToCss for InvertMedium {
    fn to_css(&self) -> String {
        format!("not {}", self.inner.to_css())
    }
}

impl CssMedium for InvertMedium {
    fn validate(&self) -> bool {
        !self.inner.validate()
    }
}

/// Any member of the medium family, as a media list would store it.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaQuery {
    Plain(Medium),
    Only(OnlyMedium),
    Invert(InvertMedium),
}

impl MediaQuery {
    /// The wrapped base medium.
    pub fn medium(&self) -> &Medium {
        match self {
            Self::Plain(medium) => medium,
            Self::Only(only) => &only.inner,
            Self::Invert(invert) => &invert.inner,
        }
    }
}

impl ToCss for MediaQuery {
    fn to_css(&self) -> String {
        match self {
            Self::Plain(medium) => medium.to_css(),
            Self::Only(only) => only.to_css(),
            Self::Invert(invert) => invert.to_css(),
        }
    }
}

impl CssMedium for MediaQuery {
    fn validate(&self) -> bool {
        match self {
            Self::Plain(medium) => medium.validate(),
            Self::Only(only) => only.validate(),
            Self::Invert(invert) => invert.validate(),
        }
    }
}
