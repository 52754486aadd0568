//! sRGB to CIE Lab conversion.
//!
//! Lab is the perceptual coordinate space used by the default distance
//! metric: Euclidean distance in Lab (CIE76 delta-E) tracks human-perceived
//! color difference far better than raw RGB distance, which is what makes
//! 16-color quantization look natural instead of posterized.
//!
//! The conversion chain is sRGB -> linear light (gamma decode) -> XYZ
//! (standard sRGB matrix) -> Lab (D65 white point).

use super::rgb::Rgb888;

/// D65 reference white point.
const D65: [f32; 3] = [0.95047, 1.00000, 1.08883];

/// Decode one sRGB channel (0..=1) to linear light.
///
/// IEC 61966-2-1 piecewise curve: the linear segment below 0.04045 is
/// divided by 12.92, the rest is `((c + 0.055) / 1.055)^2.4`.
#[inline]
fn gamma_decode(c: f32) -> f32 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Lab forward transform component function.
///
/// Cube root above the 0.008856 threshold, linear segment
/// `7.787 * t + 16/116` below it.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert an 8-bit RGB color to CIE Lab coordinates `[L, a, b]`.
///
/// Pure and deterministic: identical input always yields identical output.
pub fn rgb_to_lab(color: Rgb888) -> [f32; 3] {
    let r = gamma_decode(color.r as f32 / 255.0);
    let g = gamma_decode(color.g as f32 / 255.0);
    let b = gamma_decode(color.b as f32 / 255.0);

    // Linear RGB -> XYZ, standard sRGB matrix
    let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

    let fx = lab_f(x / D65[0]);
    let fy = lab_f(y / D65[1]);
    let fz = lab_f(z / D65[2]);

    [
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}
