//! The index buffer produced by a quantization run.

use crate::color::Rgb888;
use crate::palette::Palette;

use super::packed::{pack_indices, FirmwareImage};

/// The canonical output of a quantization run.
///
/// Stores one palette index per pixel in row-major order, together with
/// the dimensions and the palette the run used. The indexed form is
/// canonical; RGB preview and packed firmware output are derived on
/// demand.
///
/// # Example
///
/// ```
/// use retro_palette::{Palette, PixelBuffer, Quantizer, Rgb888};
///
/// let quantizer = Quantizer::new(Palette::load("classic").unwrap());
/// let pixels = vec![Rgb888::new(255, 255, 255), Rgb888::new(0, 0, 0)];
/// let buffer = PixelBuffer::new(2, 1, pixels, None).unwrap();
///
/// let image = quantizer.quantize(&buffer);
/// assert_eq!(image.indices(), &[1, 0]);
/// assert_eq!(image.to_rgb(), vec![255, 255, 255, 0, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    width: u32,
    height: u32,
    /// The palette used for the run (owned for ergonomic return values).
    palette: Palette,
}

impl IndexedImage {
    /// Wrap a run's index buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub(crate) fn new(indices: Vec<u8>, width: u32, height: u32, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "indices length must match {}x{}",
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// The palette indices, each in `0..16`.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The palette this image was quantized against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Expand to interleaved `[R, G, B, ...]` bytes for diagnostics and
    /// previews. The transparent slot expands to its stored color.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            let Rgb888 { r, g, b } = self.palette.color(idx as usize);
            rgb.extend_from_slice(&[r, g, b]);
        }
        rgb
    }

    /// Pack into two-pixels-per-byte form.
    ///
    /// See [`pack_indices`] for the byte layout.
    pub fn pack(&self) -> Vec<u8> {
        pack_indices(&self.indices, self.width, self.height)
    }

    /// Bundle the packed data with the RGB565 palette and dimensions for
    /// firmware embedding.
    pub fn to_firmware(&self) -> FirmwareImage {
        FirmwareImage {
            width: self.width,
            height: self.height,
            data: self.pack(),
            palette: self.palette.rgb565_table(),
        }
    }
}
