//! Distance-metric color spaces.
//!
//! The three interchangeable metrics are a tagged enum dispatched through
//! one `convert` and one `distance` function rather than per-mode types:
//! a pixel is converted into the active space once, then compared against
//! the 16 cached palette coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::hsv::{hue_diff, rgb_to_hsv};
use super::lab::rgb_to_lab;
use super::rgb::Rgb888;

/// Error for an unrecognized distance-metric mode name.
///
/// Returned by [`ColorSpace::from_str`] when the input is not one of
/// `perceptual`, `linear-rgb`, or `hsv`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported color space `{0}` (supported: perceptual, linear-rgb, hsv)")]
pub struct UnsupportedColorSpaceError(pub String);

/// Color space used for palette distance comparison.
///
/// Controls how a pixel and a palette entry are mapped to coordinates and
/// how dissimilarity between those coordinates is measured.
///
/// # Example
///
/// ```
/// use retro_palette::ColorSpace;
///
/// let space: ColorSpace = "linear-rgb".parse().unwrap();
/// assert_eq!(space, ColorSpace::LinearRgb);
/// assert_eq!(ColorSpace::default(), ColorSpace::Perceptual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSpace {
    /// CIE Lab coordinates; Euclidean distance is the CIE76 delta-E.
    ///
    /// The default: perceptually motivated, so quantization picks the
    /// palette entry that *looks* closest, not the numerically closest
    /// RGB triple.
    #[default]
    Perceptual,

    /// Identity transform over raw 0..=255 channels; Euclidean distance.
    ///
    /// Fastest mode. Tends to favor dark palette entries because RGB
    /// distance overweights lightness differences.
    LinearRgb,

    /// Hue/saturation/value with channels normalized to [0, 1].
    ///
    /// Hue distance respects the wraparound at 0/1. Useful when hue
    /// fidelity matters more than lightness fidelity.
    Hsv,
}

impl ColorSpace {
    /// Map a color into this space's coordinates.
    ///
    /// Pure function: no side effects, deterministic for identical input.
    pub fn convert(self, color: Rgb888) -> [f32; 3] {
        match self {
            ColorSpace::Perceptual => rgb_to_lab(color),
            ColorSpace::LinearRgb => [color.r as f32, color.g as f32, color.b as f32],
            ColorSpace::Hsv => rgb_to_hsv(color),
        }
    }

    /// Scalar dissimilarity between two coordinates in this space.
    ///
    /// Both coordinates must come from [`convert`](Self::convert) with the
    /// same mode. Smaller is more similar; the result is non-negative.
    /// For HSV the hue component wraps around the 0/1 boundary.
    pub fn distance(self, a: [f32; 3], b: [f32; 3]) -> f32 {
        match self {
            ColorSpace::Perceptual | ColorSpace::LinearRgb => {
                let d0 = a[0] - b[0];
                let d1 = a[1] - b[1];
                let d2 = a[2] - b[2];
                (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
            }
            ColorSpace::Hsv => {
                let dh = hue_diff(a[0], b[0]);
                let ds = a[1] - b[1];
                let dv = a[2] - b[2];
                (dh * dh + ds * ds + dv * dv).sqrt()
            }
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorSpace::Perceptual => "perceptual",
            ColorSpace::LinearRgb => "linear-rgb",
            ColorSpace::Hsv => "hsv",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorSpace {
    type Err = UnsupportedColorSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perceptual" => Ok(ColorSpace::Perceptual),
            "linear-rgb" => Ok(ColorSpace::LinearRgb),
            "hsv" => Ok(ColorSpace::Hsv),
            other => Err(UnsupportedColorSpaceError(other.to_string())),
        }
    }
}
