//! Output types for the quantization pipeline.
//!
//! [`IndexedImage`] is the canonical per-run output; [`FirmwareImage`]
//! bundles the packed 4bpp data with the RGB565 palette for embedding.

mod indexed;
mod packed;

pub use indexed::IndexedImage;
pub use packed::{pack_indices, FirmwareImage};

#[cfg(test)]
pub(crate) use packed::unpack_indices;
