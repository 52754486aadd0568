//! The quantization engine: nearest-color mapping and alpha-aware
//! Floyd-Steinberg error diffusion.
//!
//! Both passes walk the buffer in row-major scan order. The dithered pass
//! accumulates quantization error in a two-row sliding window: the
//! Floyd-Steinberg kernel only reaches the current and next row, so two
//! rows of state are enough for the whole image. Diffusing only forward
//! and downward is what makes a single raster pass sufficient — targets
//! already visited are never touched again.
//!
//! Error arithmetic happens in the 0..=255 channel domain with `f32`
//! precision: the accumulated value is clamped back to integer bounds
//! before every palette lookup, and the quantization error is the
//! difference between that clamped value and the chosen palette color.

mod buffer;

pub use buffer::{BufferError, PixelBuffer, OPAQUE_THRESHOLD};

use crate::palette::{NearestMatcher, Palette, TRANSPARENT_INDEX};

/// Floyd-Steinberg diffusion kernel: `(dx, dy, weight)` over 16.
///
/// ```text
///       X   7
///   3   5   1
/// ```
const FLOYD_STEINBERG: [(i64, usize, f32); 4] =
    [(1, 0, 7.0), (-1, 1, 3.0), (0, 1, 5.0), (1, 1, 1.0)];

const FS_DIVISOR: f32 = 16.0;

/// Two-row sliding error window for Floyd-Steinberg diffusion.
///
/// Row 0 holds error for the row being scanned, row 1 for the next row.
/// After each row the window rotates: the consumed row is zeroed and
/// becomes the new "next" row.
#[derive(Debug)]
struct ErrorWindow {
    rows: [Vec<[f32; 3]>; 2],
    width: usize,
}

impl ErrorWindow {
    fn new(width: usize) -> Self {
        Self {
            rows: [vec![[0.0; 3]; width], vec![[0.0; 3]; width]],
            width,
        }
    }

    /// Accumulated error for a pixel in the current row.
    #[inline]
    fn accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a pixel in the current (`dy = 0`) or next (`dy = 1`)
    /// row. Out-of-bounds targets are ignored.
    #[inline]
    fn add(&mut self, x: usize, dy: usize, error: [f32; 3]) {
        if x < self.width && dy < 2 {
            for c in 0..3 {
                self.rows[dy][x][c] += error[c];
            }
        }
    }

    /// Rotate the window: next row becomes current, a zeroed row becomes
    /// next.
    fn advance_row(&mut self) {
        self.rows.swap(0, 1);
        self.rows[1].fill([0.0; 3]);
    }
}

/// Plain nearest-color pass: no state carried between pixels.
///
/// Transparent pixels (alpha below [`OPAQUE_THRESHOLD`]) are forced to
/// [`TRANSPARENT_INDEX`]; every other pixel maps to its nearest palette
/// entry.
pub(crate) fn nearest_pass(buffer: &PixelBuffer, matcher: &NearestMatcher) -> Vec<u8> {
    (0..buffer.pixel_count())
        .map(|i| {
            if buffer.is_opaque(i) {
                matcher.resolve(buffer.pixel(i))
            } else {
                TRANSPARENT_INDEX
            }
        })
        .collect()
}

/// Floyd-Steinberg error diffusion pass.
///
/// Transparent pixels are forced to [`TRANSPARENT_INDEX`] and neither
/// receive nor propagate error: diffusion targets below the opacity
/// threshold are skipped along with out-of-bounds targets, so error never
/// flows into a pixel that will be forced transparent.
pub(crate) fn diffuse_pass(
    buffer: &PixelBuffer,
    matcher: &NearestMatcher,
    palette: &Palette,
) -> Vec<u8> {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;

    let mut output = vec![0u8; width * height];
    let mut errors = ErrorWindow::new(width);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            if !buffer.is_opaque(idx) {
                output[idx] = TRANSPARENT_INDEX;
                continue;
            }

            // Clamp the error-accumulated value to integer channel bounds
            // before the lookup; the same clamped value is the basis of
            // the quantization error.
            let acc = errors.accumulated(x);
            let pixel = buffer.pixel(idx);
            let clamped = [
                (pixel.r as f32 + acc[0]).clamp(0.0, 255.0).floor(),
                (pixel.g as f32 + acc[1]).clamp(0.0, 255.0).floor(),
                (pixel.b as f32 + acc[2]).clamp(0.0, 255.0).floor(),
            ];
            let candidate =
                crate::color::Rgb888::new(clamped[0] as u8, clamped[1] as u8, clamped[2] as u8);

            let best = matcher.resolve(candidate);
            output[idx] = best;

            let chosen = palette.color(best as usize);
            let error = [
                clamped[0] - chosen.r as f32,
                clamped[1] - chosen.g as f32,
                clamped[2] - chosen.b as f32,
            ];

            for &(dx, dy, weight) in &FLOYD_STEINBERG {
                let nx = x as i64 + dx;
                if nx < 0 || nx >= width as i64 {
                    continue;
                }
                let ny = y + dy;
                if ny >= height {
                    continue;
                }
                // Error never flows into a pixel that will be forced
                // transparent.
                if !buffer.is_opaque(ny * width + nx as usize) {
                    continue;
                }
                errors.add(
                    nx as usize,
                    dy,
                    [
                        error[0] * weight / FS_DIVISOR,
                        error[1] * weight / FS_DIVISOR,
                        error[2] * weight / FS_DIVISOR,
                    ],
                );
            }
        }
        errors.advance_row();
    }

    output
}
