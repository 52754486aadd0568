//! Fixed 16-slot palette with derived RGB565 entries.
//!
//! A [`Palette`] always holds exactly [`PALETTE_SIZE`] colors. Both the
//! 8-bit source colors and the packed RGB565 equivalents are stored;
//! mutation of a slot updates both immediately so the derived table can
//! never go stale.

use std::str::FromStr;

use super::error::PaletteError;
use super::presets::Preset;
use crate::color::{Rgb565, Rgb888};

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 16;

/// The reserved transparent slot.
///
/// The slot carries no special color value; the quantization engine forces
/// pixels below the opacity threshold to this index and never diffuses
/// error through them. Opaque pixels may still match slot 0 on color.
pub const TRANSPARENT_INDEX: u8 = 0;

/// An ordered set of 16 colors with their packed RGB565 equivalents.
///
/// # Example
///
/// ```
/// use retro_palette::{Palette, Rgb888};
///
/// let mut palette = Palette::load("classic").unwrap();
/// assert_eq!(palette.color(1), Rgb888::new(255, 255, 255));
/// assert_eq!(palette.rgb565(1).0, 0xFFFF);
///
/// // Replacing a slot recomputes the packed entry immediately
/// palette.set_color(1, Rgb888::new(248, 0, 0)).unwrap();
/// assert_eq!(palette.rgb565(1).0, 0xF800);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Rgb888; PALETTE_SIZE],
    packed: [Rgb565; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from a built-in preset.
    pub fn preset(preset: Preset) -> Self {
        Self::from_colors(preset.colors())
    }

    /// Load a palette by preset name.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownPreset`] if `name` is not one of
    /// `classic`, `gameboy`, `sepia`, `neon`.
    pub fn load(name: &str) -> Result<Self, PaletteError> {
        let preset = Preset::from_str(name)?;
        tracing::debug!(preset = %preset, "loaded palette preset");
        Ok(Self::preset(preset))
    }

    /// Create a palette from an explicit 16-entry color set.
    pub fn from_colors(colors: [Rgb888; PALETTE_SIZE]) -> Self {
        let packed = colors.map(Rgb565::from);
        Self { colors, packed }
    }

    /// Create a palette from 16 hex color strings.
    ///
    /// Accepts the formats of [`Rgb888::from_str`] (`#RRGGBB`, `RRGGBB`,
    /// `#RGB`, `RGB`).
    ///
    /// # Errors
    ///
    /// [`PaletteError::WrongColorCount`] if the slice does not contain
    /// exactly 16 entries, [`PaletteError::ParseColor`] on a malformed
    /// hex string.
    ///
    /// # Example
    ///
    /// ```
    /// use retro_palette::Palette;
    ///
    /// let greys: Vec<String> = (0..16).map(|i| format!("#{0:02X}{0:02X}{0:02X}", i * 17)).collect();
    /// let refs: Vec<&str> = greys.iter().map(String::as_str).collect();
    /// let palette = Palette::from_hex(&refs).unwrap();
    /// assert_eq!(palette.color(15).r, 255);
    /// ```
    pub fn from_hex(hex: &[&str]) -> Result<Self, PaletteError> {
        if hex.len() != PALETTE_SIZE {
            return Err(PaletteError::WrongColorCount { count: hex.len() });
        }
        let mut colors = [Rgb888::new(0, 0, 0); PALETTE_SIZE];
        for (slot, s) in colors.iter_mut().zip(hex) {
            *slot = Rgb888::from_str(s)?;
        }
        Ok(Self::from_colors(colors))
    }

    /// Replace the color in one slot.
    ///
    /// Updates the RGB888 and RGB565 representations together. Cached
    /// palette coordinates held by a
    /// [`NearestMatcher`](crate::palette::NearestMatcher) are built per
    /// quantization run, so they pick up the change on the next run.
    ///
    /// # Errors
    ///
    /// [`PaletteError::IndexOutOfRange`] if `index` is not in `0..=15`.
    pub fn set_color(&mut self, index: usize, color: Rgb888) -> Result<(), PaletteError> {
        if index >= PALETTE_SIZE {
            return Err(PaletteError::IndexOutOfRange { index });
        }
        self.colors[index] = color;
        self.packed[index] = Rgb565::from(color);
        Ok(())
    }

    /// The color in the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`. Use [`set_color`](Self::set_color) for
    /// checked mutation; reads of engine-produced indices are always in
    /// range.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb888 {
        self.colors[index]
    }

    /// All 16 colors in slot order.
    #[inline]
    pub fn colors(&self) -> &[Rgb888; PALETTE_SIZE] {
        &self.colors
    }

    /// The packed RGB565 color in the given slot.
    #[inline]
    pub fn rgb565(&self, index: usize) -> Rgb565 {
        self.packed[index]
    }

    /// All 16 packed RGB565 colors in slot order.
    #[inline]
    pub fn rgb565_table(&self) -> [Rgb565; PALETTE_SIZE] {
        self.packed
    }
}

impl Default for Palette {
    /// The `classic` preset.
    fn default() -> Self {
        Self::preset(Preset::Classic)
    }
}
