//! RGB to HSV conversion with all channels normalized to [0, 1].
//!
//! Hue is stored as a fraction of a full turn rather than degrees, so the
//! wraparound at 0/1 is handled by [`hue_diff`] when computing distances.

use super::rgb::Rgb888;

/// Convert an 8-bit RGB color to `[h, s, v]`, each in [0, 1].
///
/// Hue of an achromatic color (max == min) is 0 by convention.
pub fn rgb_to_hsv(color: Rgb888) -> [f32; 3] {
    let r = color.r as f32 / 255.0;
    let g = color.g as f32 / 255.0;
    let b = color.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    [h, s, v]
}

/// Circular hue difference between two hues in [0, 1).
///
/// Returns `min(|h1 - h2|, 1 - |h1 - h2|)`, which is symmetric and
/// bounded by 0.5 (hues half a turn apart are maximally different).
#[inline]
pub fn hue_diff(h1: f32, h2: f32) -> f32 {
    let d = (h1 - h2).abs();
    d.min(1.0 - d)
}
