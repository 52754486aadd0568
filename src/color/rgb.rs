//! RGB color types: full-color input pixels and packed firmware colors.
//!
//! [`Rgb888`] is the immutable source pixel format (one byte per channel).
//! [`Rgb565`] is the packed 16-bit format consumed by display hardware,
//! derived from `Rgb888` by truncating the low bits of each channel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::palette::ParseColorError;

/// A full-color RGB pixel with 8 bits per channel.
///
/// This is the input color format: source images are decoded to `Rgb888`
/// before quantization. Values are immutable once read from source pixels.
///
/// # Example
///
/// ```
/// use retro_palette::Rgb888;
///
/// let orange = Rgb888::new(252, 100, 0);
/// assert_eq!(orange.to_bytes(), [252, 100, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb888 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb888 {
    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb888 {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use retro_palette::Rgb888;
    ///
    /// let white: Rgb888 = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb888::new(255, 255, 255));
    ///
    /// let red: Rgb888 = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb888::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// A packed 16-bit color in RGB565 layout (5 red, 6 green, 5 blue bits).
///
/// Derived from [`Rgb888`] by truncation, not rounding: red keeps its top
/// 5 bits, green its top 6, blue its top 5, assembled as
/// `(r5 << 11) | (g6 << 5) | b5`. Truncation matches what the display
/// hardware does, so palette entries embedded in firmware render exactly
/// as computed here.
///
/// # Example
///
/// ```
/// use retro_palette::{Rgb565, Rgb888};
///
/// let red = Rgb565::from(Rgb888::new(248, 0, 0));
/// assert_eq!(red.0, 0xF800);
/// assert_eq!(red.to_string(), "0xF800");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    /// Expand back to 8-bit channels by left shift.
    ///
    /// No bit replication is applied: a color whose channels are already
    /// exact in 5/6/5 bits survives a pack/expand round trip unchanged.
    #[inline]
    pub const fn to_rgb888(self) -> Rgb888 {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;
        Rgb888::new(r << 3, g << 2, b << 3)
    }
}

impl From<Rgb888> for Rgb565 {
    #[inline]
    fn from(color: Rgb888) -> Self {
        let r = (color.r as u16 & 0xF8) << 8;
        let g = (color.g as u16 & 0xFC) << 3;
        let b = (color.b as u16) >> 3;
        Self(r | g | b)
    }
}

impl fmt::Display for Rgb565 {
    /// Format as the 4-hex-digit literal used in generated firmware
    /// sources, e.g. `0xF800`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_truncates_low_bits() {
        // 255 and 248 share the same top 5 bits
        let a = Rgb565::from(Rgb888::new(255, 255, 255));
        let b = Rgb565::from(Rgb888::new(248, 252, 248));
        assert_eq!(a, b);
        assert_eq!(a.0, 0xFFFF);
    }

    #[test]
    fn test_rgb565_bit_layout() {
        assert_eq!(Rgb565::from(Rgb888::new(248, 0, 0)).0, 0xF800);
        assert_eq!(Rgb565::from(Rgb888::new(0, 252, 0)).0, 0x07E0);
        assert_eq!(Rgb565::from(Rgb888::new(0, 0, 248)).0, 0x001F);
        assert_eq!(Rgb565::from(Rgb888::new(0, 0, 0)).0, 0x0000);
    }

    #[test]
    fn test_rgb565_roundtrip_exact_colors() {
        // Colors already expressible in 5/6/5 bits survive expansion
        // and re-truncation unchanged.
        for color in [
            Rgb888::new(0, 0, 0),
            Rgb888::new(248, 252, 248),
            Rgb888::new(132, 100, 0),
            Rgb888::new(64, 64, 64),
        ] {
            let packed = Rgb565::from(color);
            let expanded = packed.to_rgb888();
            assert_eq!(Rgb565::from(expanded), packed);
        }

        // And an exactly representable color round-trips to itself.
        let exact = Rgb888::new(0b1111_1000, 0b1111_1100, 0b0000_1000);
        assert_eq!(Rgb565::from(exact).to_rgb888(), exact);
    }

    #[test]
    fn test_rgb565_hex_display() {
        assert_eq!(Rgb565(0x0000).to_string(), "0x0000");
        assert_eq!(Rgb565(0xF800).to_string(), "0xF800");
        assert_eq!(Rgb565(0x07E0).to_string(), "0x07E0");
    }

    #[test]
    fn test_parse_6digit() {
        let c: Rgb888 = "#841F00".parse().unwrap();
        assert_eq!(c, Rgb888::new(0x84, 0x1F, 0x00));
    }

    #[test]
    fn test_parse_shorthand() {
        let c: Rgb888 = "fff".parse().unwrap();
        assert_eq!(c, Rgb888::new(255, 255, 255));
    }

    #[test]
    fn test_parse_invalid_length() {
        let result = "#FFFF".parse::<Rgb888>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));
    }

    #[test]
    fn test_parse_invalid_hex() {
        let result = "#ZZZZZZ".parse::<Rgb888>();
        assert!(matches!(result, Err(ParseColorError::InvalidHex(_))));
    }
}
