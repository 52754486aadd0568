//! retro-palette: 16-color palette quantization for retro display firmware
//!
//! This library converts full-color raster images into fixed 16-entry
//! palettes suitable for memory-constrained display hardware, producing
//! packed 4-bit-per-pixel data plus RGB565 palette metadata for embedding
//! in firmware.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder is the primary entry point:
//!
//! ```
//! use retro_palette::{Palette, PixelBuffer, Quantizer, Rgb888};
//!
//! let palette = Palette::load("classic").unwrap();
//! let quantizer = Quantizer::new(palette).dither(true);
//!
//! let pixels = vec![Rgb888::new(180, 90, 30); 16];
//! let buffer = PixelBuffer::new(4, 4, pixels, None).unwrap();
//!
//! let image = quantizer.quantize(&buffer);
//! let firmware = image.to_firmware();
//! assert_eq!(firmware.data.len(), 8); // two pixels per byte
//! ```
//!
//! # Pipeline
//!
//! ```text
//! decoded pixel buffer          (from an external decoder)
//!     |
//!     v
//! NearestMatcher                (palette coordinates cached once per run)
//!     |
//!     v
//! quantization pass             (per pixel: resolve nearest entry;
//!     |                          optionally diffuse quantization error)
//!     v
//! IndexedImage                  (one 4-bit index per pixel)
//!     |
//!     v
//! FirmwareImage                 (packed bytes + RGB565 palette)
//! ```
//!
//! # Distance spaces
//!
//! Palette matching supports three interchangeable metrics via
//! [`ColorSpace`]:
//!
//! - **Perceptual** (default): CIE Lab coordinates; Euclidean distance in
//!   Lab approximates human-perceived color difference, so quantization
//!   picks the entry that *looks* closest. This is what keeps 16-color
//!   output natural instead of posterized.
//! - **Linear RGB**: Euclidean distance over raw channels. Fast, but
//!   overweights lightness differences.
//! - **HSV**: hue/saturation/value with circular hue distance, for
//!   content where hue fidelity matters most.
//!
//! # Transparency
//!
//! Palette slot 0 is reserved as the transparent slot by convention.
//! Pixels with alpha below 128 are forced to index 0 and are excluded
//! from error diffusion entirely — error never flows into or out of a
//! pixel that will be rendered transparent. Opaque pixels may still match
//! slot 0 on color: pure black resolves to slot 0 in the `classic`
//! palette.
//!
//! # Determinism
//!
//! The pipeline is pure and single-threaded per run: identical input,
//! palette, and options always produce identical output. Error diffusion
//! imposes a strict sequential scan-order dependency, so per-run state
//! (the error window and index buffer) is owned by one run and never
//! shared.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;

#[cfg(test)]
mod domain_tests;

pub use api::{QuantizeError, Quantizer};
pub use color::{ColorSpace, Rgb565, Rgb888, UnsupportedColorSpaceError};
pub use output::{pack_indices, FirmwareImage, IndexedImage};
pub use palette::{
    NearestMatcher, Palette, PaletteError, ParseColorError, Preset, PALETTE_SIZE,
    TRANSPARENT_INDEX,
};
pub use quantize::{BufferError, PixelBuffer, OPAQUE_THRESHOLD};
