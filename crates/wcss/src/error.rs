//! Error types for CSS token and value processing.
//!
//! Two failure surfaces live here: [`CodepointError`] for the strict
//! UTF-16 codec (callers branch on the exact kind), and [`WcssError`] for
//! everything the token and value builders can reject.

use thiserror::Error;

/// Errors from encoding or decoding Unicode code points.
///
/// The decode kinds are deliberately distinct: a consumer recovering from
/// a malformed buffer needs to know whether it saw an unpaired high
/// surrogate, a stray low surrogate, or simply ran off the end.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodepointError {
    /// The value is above `U+10FFFF` or inside the surrogate band, so it
    /// is not a Unicode scalar value.
    #[error("{0:#x} is not a Unicode scalar value")]
    OutOfRange(u32),

    /// A high surrogate unit with no valid low surrogate after it,
    /// including a high surrogate at the end of the buffer.
    #[error("unpaired high surrogate")]
    InvalidHighSurrogate,

    /// A low surrogate unit with no preceding high surrogate.
    #[error("stray low surrogate")]
    InvalidLowSurrogate,

    /// The requested position lies outside the buffer.
    #[error("index out of bounds")]
    InvalidIndex,
}

/// Errors that can occur while building tokens and values from CSS text.
///
/// # Examples
///
/// ```rust
/// use wcss::tokens::RangeToken;
///
/// // Not hexadecimal, so the range token cannot be built.
/// assert!(RangeToken::new("zz", None).is_err());
/// ```
#[derive(Error, Debug)]
pub enum WcssError {
    /// Invalid CSS syntax was encountered.
    ///
    /// The string contains details about what was unexpected.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// A code point operation failed while materializing a token.
    #[error("code point error: {0}")]
    Codepoint(#[from] CodepointError),
}
