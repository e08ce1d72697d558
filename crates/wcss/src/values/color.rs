//! RGBA color values with parsing.
//!
//! Colors reach this layer in several notations:
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **Functional**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **Named**: the CSS keyword colors (`red`, `teal`, ...)
//! - **Special**: `transparent`
//!
//! Serialization always goes through the functional notation, so parsing
//! and re-serialization normalize rather than round-trip the source text.

use thiserror::Error;

use super::ToCss;

/// Error returned when color parsing fails.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ColorParseError {
    message: String,
}

impl ColorParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black, the default substituted for omitted colors.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    /// Returns true if the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Parse a color string in any supported notation.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::new("empty color string"));
        }

        let lower = input.to_lowercase();

        if lower == "transparent" {
            return Ok(Self::transparent());
        }

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower);
        }

        Self::parse_named(&lower)
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let chars: Vec<char> = hex.to_lowercase().chars().collect();

        match chars.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                Ok(Self::rgb(r, g, b))
            }
            4 => {
                // #RGBA -> #RRGGBBAA
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                let a = Self::parse_hex_digit(chars[3])? * 17;
                Ok(Self::rgba(r, g, b, a as f32 / 255.0))
            }
            6 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                let a = Self::parse_hex_pair(chars[6], chars[7])?;
                Ok(Self::rgba(r, g, b, a as f32 / 255.0))
            }
            len => Err(ColorParseError::new(format!(
                "invalid hex color length: {}",
                len
            ))),
        }
    }

    fn parse_hex_digit(c: char) -> Result<u8, ColorParseError> {
        match c {
            '0'..='9' => Ok(c as u8 - b'0'),
            'a'..='f' => Ok(c as u8 - b'a' + 10),
            _ => Err(ColorParseError::new(format!("invalid hex digit: {}", c))),
        }
    }

    fn parse_hex_pair(c1: char, c2: char) -> Result<u8, ColorParseError> {
        let high = Self::parse_hex_digit(c1)?;
        let low = Self::parse_hex_digit(c2)?;
        Ok(high * 16 + low)
    }

    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let start = input
            .find('(')
            .ok_or_else(|| ColorParseError::new("missing '(' in rgb function"))?;
        let end = input
            .find(')')
            .ok_or_else(|| ColorParseError::new("missing ')' in rgb function"))?;

        let content = &input[start + 1..end];
        let parts: Vec<&str> = content.split(',').map(|s| s.trim()).collect();

        if parts.len() < 3 {
            return Err(ColorParseError::new("rgb requires at least 3 components"));
        }

        let r = Self::parse_u8(parts[0])?;
        let g = Self::parse_u8(parts[1])?;
        let b = Self::parse_u8(parts[2])?;

        let a = if parts.len() >= 4 {
            parts[3]
                .parse()
                .map_err(|_| ColorParseError::new(format!("invalid alpha: {}", parts[3])))?
        } else {
            1.0
        };

        Ok(Self::rgba(r, g, b, a))
    }

    fn parse_u8(s: &str) -> Result<u8, ColorParseError> {
        let val: i32 = s
            .parse()
            .map_err(|_| ColorParseError::new(format!("invalid number: {}", s)))?;
        if !(0..=255).contains(&val) {
            return Err(ColorParseError::new(format!(
                "value out of range (0-255): {}",
                val
            )));
        }
        Ok(val as u8)
    }

    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        match name {
            "black" => Ok(Self::rgb(0, 0, 0)),
            "silver" => Ok(Self::rgb(192, 192, 192)),
            "gray" | "grey" => Ok(Self::rgb(128, 128, 128)),
            "white" => Ok(Self::rgb(255, 255, 255)),
            "maroon" => Ok(Self::rgb(128, 0, 0)),
            "red" => Ok(Self::rgb(255, 0, 0)),
            "purple" => Ok(Self::rgb(128, 0, 128)),
            "fuchsia" | "magenta" => Ok(Self::rgb(255, 0, 255)),
            "green" => Ok(Self::rgb(0, 128, 0)),
            "lime" => Ok(Self::rgb(0, 255, 0)),
            "olive" => Ok(Self::rgb(128, 128, 0)),
            "yellow" => Ok(Self::rgb(255, 255, 0)),
            "navy" => Ok(Self::rgb(0, 0, 128)),
            "blue" => Ok(Self::rgb(0, 0, 255)),
            "teal" => Ok(Self::rgb(0, 128, 128)),
            "aqua" | "cyan" => Ok(Self::rgb(0, 255, 255)),
            "orange" => Ok(Self::rgb(255, 165, 0)),
            _ => Err(ColorParseError::new(format!(
                "unknown color name: {}",
                name
            ))),
        }
    }
}

impl ToCss for Color {
    fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_3_digit() {
        assert_eq!(Color::parse("#f00").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("#abc").unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_hex_6_digit() {
        assert_eq!(Color::parse("#ff0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("#9932CC").unwrap(), Color::rgb(0x99, 0x32, 0xcc));
    }

    #[test]
    fn test_hex_with_alpha() {
        assert_eq!(Color::parse("#0000").unwrap().a, 0.0);
        let color = Color::parse("#ff000080").unwrap();
        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert!((color.a - 0x80 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(
            Color::parse("rgb(255, 0, 0)").unwrap(),
            Color::rgb(255, 0, 0)
        );
        assert_eq!(
            Color::parse("rgba(0, 0, 255, 0.5)").unwrap(),
            Color::rgba(0, 0, 255, 0.5)
        );
    }

    #[test]
    fn test_named_and_special() {
        assert_eq!(Color::parse("teal").unwrap(), Color::rgb(0, 128, 128));
        assert_eq!(Color::parse("RED").unwrap(), Color::rgb(255, 0, 0));
        assert!(Color::parse("transparent").unwrap().is_transparent());
        assert!(Color::parse("notacolor").is_err());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Color::rgb(1, 2, 3).to_css(), "rgb(1, 2, 3)");
        assert_eq!(
            Color::rgba(1, 2, 3, 0.5).to_css(),
            "rgba(1, 2, 3, 0.5)"
        );
    }
}
