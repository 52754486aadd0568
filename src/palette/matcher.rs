//! Nearest-palette-color resolution with per-run coordinate caching.
//!
//! A [`NearestMatcher`] converts all 16 palette entries into the active
//! color space once, then resolves pixels with an O(16) linear scan. The
//! matcher is built at the start of every quantization run from the
//! palette and color space in effect, so the cached coordinates can never
//! be stale with respect to palette mutation or a metric change.

use super::palette::{Palette, PALETTE_SIZE};
use crate::color::{ColorSpace, Rgb888};

/// Resolves pixels to their nearest palette index.
///
/// # Example
///
/// ```
/// use retro_palette::{ColorSpace, NearestMatcher, Palette, Rgb888};
///
/// let palette = Palette::load("classic").unwrap();
/// let matcher = NearestMatcher::new(&palette, ColorSpace::Perceptual);
///
/// // Pure white is palette entry 1; near-white resolves to it too
/// assert_eq!(matcher.resolve(Rgb888::new(255, 255, 255)), 1);
/// assert_eq!(matcher.resolve(Rgb888::new(250, 250, 250)), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NearestMatcher {
    space: ColorSpace,
    coords: [[f32; 3]; PALETTE_SIZE],
}

impl NearestMatcher {
    /// Cache the palette's coordinates under the given color space.
    ///
    /// Sixteen conversions, performed once per quantization run rather
    /// than per pixel.
    pub fn new(palette: &Palette, space: ColorSpace) -> Self {
        let coords = palette.colors().map(|c| space.convert(c));
        Self { space, coords }
    }

    /// The color space this matcher compares in.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Index of the palette entry nearest to `color`.
    ///
    /// Converts the pixel once, scans the 16 cached coordinates, and
    /// returns the first minimum: exact distance ties break to the lowest
    /// index. Slot 0 participates in the search like any other slot.
    pub fn resolve(&self, color: Rgb888) -> u8 {
        let target = self.space.convert(color);

        // Linear scan; strict `<` keeps the lowest index on ties.
        let mut best_idx = 0u8;
        let mut best_dist = f32::MAX;
        for (i, &coord) in self.coords.iter().enumerate() {
            let dist = self.space.distance(target, coord);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i as u8;
            }
        }
        best_idx
    }
}
