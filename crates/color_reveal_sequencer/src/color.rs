// SPDX-License-Identifier: MIT OR Apache-2.0
//! RGBA colors for reveal layers.
//!
//! The sequencer itself is generic over any `Clone` color; [`Rgba`] is the
//! concrete type used by configs and the demo driver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Rgba {
    /// Opaque black
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    /// Opaque red
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    /// Opaque green
    pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    /// Opaque blue
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) {
            return Err(ColorParseError::InvalidLength(hex.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };

        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not opaque
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Error when parsing a hex color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// Wrong number of hex digits
    #[error("Expected 6 or 8 hex digits: {0:?}")]
    InvalidLength(String),

    /// Non-hex character
    #[error("Invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgba::from_hex("#FF0000").unwrap(), Rgba::RED);
        assert_eq!(Rgba::from_hex("0000ff").unwrap(), Rgba::BLUE);
        assert_eq!(Rgba::from_hex("#11223344").unwrap(), Rgba::rgba(0x11, 0x22, 0x33, 0x44));
        assert_eq!("#FFFFFF".parse::<Rgba>().unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Rgba::from_hex("#FFF"), Err(ColorParseError::InvalidLength(_))));
        assert!(matches!(Rgba::from_hex("#GG0000"), Err(ColorParseError::InvalidDigit(_))));
        assert!(matches!(Rgba::from_hex("#+F0000"), Err(ColorParseError::InvalidDigit(_))));
        assert!(matches!(Rgba::from_hex("#ÄÄÄÄ"), Err(ColorParseError::InvalidDigit(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::rgb(0x12, 0xAB, 0x00).to_hex(), "#12AB00");
        assert_eq!(Rgba::rgba(0, 0, 0, 0x80).to_hex(), "#00000080");
    }
}
