//! Decoded pixel buffer input type.
//!
//! [`PixelBuffer`] is the boundary contract with external decoders: a
//! row-major, top-left-origin grid of [`Rgb888`] pixels with an optional
//! per-pixel alpha channel. Dimensions are validated at construction so a
//! quantization run either starts with a well-formed buffer or never
//! starts.

use thiserror::Error;

use crate::color::Rgb888;

/// Minimum alpha value at which a pixel is treated as opaque.
///
/// Pixels with alpha below this threshold are forced to the transparent
/// palette slot and excluded from error diffusion.
pub const OPAQUE_THRESHOLD: u8 = 128;

/// Error type for malformed input buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Zero width or height.
    #[error("invalid image dimensions {width}x{height} (both must be non-zero)")]
    InvalidDimensions {
        /// Supplied width
        width: u32,
        /// Supplied height
        height: u32,
    },

    /// Pixel data length does not match the dimensions.
    #[error("pixel data length {actual} does not match dimensions (expected {expected})")]
    PixelCountMismatch {
        /// Required length for the given dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Alpha channel length does not match the pixel count.
    #[error("alpha channel length {actual} does not match pixel count {expected}")]
    AlphaCountMismatch {
        /// Required length (one alpha byte per pixel)
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}

/// A decoded image: width, height, row-major pixels, optional alpha.
///
/// The buffer is read-only once constructed; the quantization engine
/// borrows it for the duration of one run. A buffer without an alpha
/// channel reads as fully opaque (alpha 255) everywhere, which collapses
/// the alpha-aware and plain code paths into one.
///
/// # Example
///
/// ```
/// use retro_palette::{PixelBuffer, Rgb888};
///
/// let pixels = vec![Rgb888::new(255, 255, 255), Rgb888::new(0, 0, 0)];
/// let buffer = PixelBuffer::new(2, 1, pixels, None).unwrap();
/// assert_eq!(buffer.width(), 2);
/// assert!(buffer.is_opaque(0));
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
    alpha: Option<Vec<u8>>,
}

impl PixelBuffer {
    /// Create a buffer from pixels and an optional alpha channel.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidDimensions`] if `width` or `height` is zero
    /// - [`BufferError::PixelCountMismatch`] if `pixels.len() != width * height`
    /// - [`BufferError::AlphaCountMismatch`] if an alpha channel is supplied
    ///   with a different length than the pixel count
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<Rgb888>,
        alpha: Option<Vec<u8>>,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BufferError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        if let Some(ref alpha) = alpha {
            if alpha.len() != expected {
                return Err(BufferError::AlphaCountMismatch {
                    expected,
                    actual: alpha.len(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
            alpha,
        })
    }

    /// Create a buffer from interleaved `[R, G, B, ...]` bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidDimensions`] on zero dimensions,
    /// [`BufferError::PixelCountMismatch`] if `data.len() != width * height * 3`.
    pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(BufferError::PixelCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        let pixels = data
            .chunks_exact(3)
            .map(|px| Rgb888::new(px[0], px[1], px[2]))
            .collect();
        Self::new(width, height, pixels, None)
    }

    /// Create a buffer from interleaved `[R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidDimensions`] on zero dimensions,
    /// [`BufferError::PixelCountMismatch`] if `data.len() != width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(BufferError::PixelCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        let mut pixels = Vec::with_capacity(expected / 4);
        let mut alpha = Vec::with_capacity(expected / 4);
        for px in data.chunks_exact(4) {
            pixels.push(Rgb888::new(px[0], px[1], px[2]));
            alpha.push(px[3]);
        }
        Self::new(width, height, pixels, Some(alpha))
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

    /// Total pixel count (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// The pixel at the given row-major index.
    #[inline]
    pub fn pixel(&self, index: usize) -> Rgb888 {
        self.pixels[index]
    }

    /// Alpha at the given row-major index; 255 when the buffer has no
    /// alpha channel.
    #[inline]
    pub fn alpha(&self, index: usize) -> u8 {
        self.alpha.as_ref().map_or(255, |a| a[index])
    }

    /// Whether the pixel at the given index meets the opacity threshold.
    #[inline]
    pub fn is_opaque(&self, index: usize) -> bool {
        self.alpha(index) >= OPAQUE_THRESHOLD
    }
}
