//! The [`Quantizer`] builder — the primary entry point for the crate.

use crate::color::ColorSpace;
use crate::output::IndexedImage;
use crate::palette::{NearestMatcher, Palette, PaletteError};
use crate::quantize::{diffuse_pass, nearest_pass, PixelBuffer};
use crate::Rgb888;

/// High-level quantization builder.
///
/// Wraps the pipeline (nearest-color resolution, optional error
/// diffusion, output wrapping) behind a fluent builder with sensible
/// defaults: perceptual distance, dithering off.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one builder is
///   reusable across any number of images
/// - Each run builds its own [`NearestMatcher`], so palette mutation via
///   [`set_color()`](Self::set_color) can never leave a stale coordinate
///   cache behind
///
/// # Example
///
/// ```
/// use retro_palette::{ColorSpace, Palette, PixelBuffer, Quantizer, Rgb888};
///
/// let quantizer = Quantizer::new(Palette::load("classic").unwrap())
///     .color_space(ColorSpace::Perceptual)
///     .dither(true);
///
/// let pixels = vec![Rgb888::new(128, 128, 128); 4];
/// let buffer = PixelBuffer::new(2, 2, pixels, None).unwrap();
/// let image = quantizer.quantize(&buffer);
///
/// assert_eq!(image.indices().len(), 4);
/// assert!(image.indices().iter().all(|&i| i < 16));
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
    space: ColorSpace,
    dither: bool,
}

impl Quantizer {
    /// Create a quantizer with the given palette.
    ///
    /// Defaults: perceptual color space, dithering off.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            space: ColorSpace::default(),
            dither: false,
        }
    }

    /// Select the distance-metric color space.
    #[inline]
    pub fn color_space(mut self, space: ColorSpace) -> Self {
        self.space = space;
        self
    }

    /// Enable or disable Floyd-Steinberg error diffusion.
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    /// The palette in use.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace one palette slot.
    ///
    /// The RGB565 table updates immediately and the next run's matcher
    /// picks up the new color.
    ///
    /// # Errors
    ///
    /// [`PaletteError::IndexOutOfRange`] if `index` is not in `0..=15`.
    pub fn set_color(&mut self, index: usize, color: Rgb888) -> Result<(), PaletteError> {
        self.palette.set_color(index, color)
    }

    /// Quantize one pixel buffer to palette indices.
    ///
    /// Runs a single row-major raster pass: transparent pixels (alpha
    /// below 128) are forced to slot 0, opaque pixels resolve to their
    /// nearest palette entry, and in dithering mode quantization error
    /// diffuses to unvisited opaque neighbors with Floyd-Steinberg
    /// weights.
    ///
    /// Dimension validation happened when `buffer` was constructed, so
    /// the run itself cannot fail; the per-run state (matcher cache,
    /// error window, index buffer) is private to this call.
    pub fn quantize(&self, buffer: &PixelBuffer) -> IndexedImage {
        tracing::debug!(
            width = buffer.width(),
            height = buffer.height(),
            space = %self.space,
            dither = self.dither,
            "quantizing pixel buffer"
        );

        let matcher = NearestMatcher::new(&self.palette, self.space);
        let indices = if self.dither {
            diffuse_pass(buffer, &matcher, &self.palette)
        } else {
            nearest_pass(buffer, &matcher)
        };

        IndexedImage::new(indices, buffer.width(), buffer.height(), self.palette.clone())
    }
}
