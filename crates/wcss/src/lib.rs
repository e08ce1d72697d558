//! # WCSS - CSS token and value layer
//!
//! The lexical and value layer of a CSS engine: raw CSS text fragments
//! become typed tokens, and tokens compose into a structured, queryable
//! value tree used by style resolution, media-query evaluation, and
//! serialization back to canonical CSS text.
//!
//! ## Quick Start
//!
//! ```rust
//! use wcss::parser::parse_value_list;
//! use wcss::values::ToCss;
//!
//! let (_, margin) = parse_value_list("1px 2px 3px 4px").unwrap();
//! assert_eq!(margin.len(), 4);
//! assert_eq!(margin.to_css(), "1px 2px 3px 4px");
//!
//! // Typed extraction: present and correctly typed.
//! let length = margin.to_length(1, true).unwrap();
//! assert_eq!(length.to_css(), "2px");
//! ```
//!
//! Unicode ranges are fully materialized, surrogate pairs included:
//!
//! ```rust
//! use wcss::tokens::RangeToken;
//!
//! let range = RangeToken::new("10000", Some("10002")).unwrap();
//! assert_eq!(range.selected().len(), 3);
//! assert_eq!(range.to_value(), "#10000-#10002");
//! ```
//!
//! ## Supported Features
//!
//! ### Tokens
//! - Delimiters, identifiers, strings, numbers, dimensions
//! - Unicode ranges: `U+0400`, `U+0400-04FF`, `U+4??`
//!
//! ### Values
//! - Numbers and lengths: `px`, `em`, `rem`, `ex`, `cm`, `mm`, `in`,
//!   `pt`, `pc`, `vw`, `vh`
//! - Colors: hex, `rgb()`/`rgba()`, named, `transparent`
//! - Value lists with space, comma, or slash separators
//!
//! ### Media
//! - Media descriptors with the `only` and `not` modifiers
//! - Feature constraints are recorded but not evaluated yet
//!
//! ## Error Philosophy
//!
//! Two styles coexist deliberately. Range construction, list indexing,
//! and tolerant extraction clamp or substitute defaults and never fail.
//! The code-point codec and required extraction are strict: malformed
//! surrogate sequences report a distinguishing error kind, and a missing
//! required value comes back as an absence for the caller to judge.
//!
//! ## Modules
//!
//! - [`codepoint`]: UTF-16 code unit conversion
//! - [`tokens`]: lexical token shapes, including the range token
//! - [`values`]: typed values, value lists, and canonical serialization
//! - [`media`]: media descriptors and their modifiers
//! - [`parser`]: text parsers building tokens, values, and media
//! - [`error`]: error types

pub mod codepoint;
pub mod error;
pub mod media;
pub mod parser;
pub mod tokens;
pub mod values;

pub use error::{CodepointError, WcssError};
pub use media::{CssMedium, InvertMedium, MediaQuery, Medium, OnlyMedium};
pub use tokens::{CssToken, RangeToken};
pub use values::{Color, CssValue, Length, LengthUnit, Separator, ToCss, ValueList};
