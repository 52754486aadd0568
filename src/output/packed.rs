//! Sub-byte pixel packing and the firmware embedding container.
//!
//! Two 4-bit palette indices are stored per byte: the even-column pixel
//! in the low nibble, its right neighbor in the high nibble. Packing runs
//! row by row; an odd-width row zero-fills the high nibble of its last
//! byte, so every row starts on a byte boundary and the packed length is
//! `height * ceil(width / 2)`.

use serde::{Deserialize, Serialize};

use crate::color::Rgb565;
use crate::palette::PALETTE_SIZE;

/// Pack an index buffer into two-pixels-per-byte form.
///
/// `indices` is row-major with `width * height` entries, each in `0..16`.
/// For the column pair `(x, x + 1)`:
/// `byte = (index[x + 1] << 4) | (index[x] & 0x0F)`, with a missing right
/// pixel at an odd row end reading as 0.
///
/// # Example
///
/// ```
/// use retro_palette::pack_indices;
///
/// // 2x1 image: indices [1, 0] pack into a single byte, low nibble first
/// assert_eq!(pack_indices(&[1, 0], 2, 1), vec![0x01]);
/// // 3x1 image: the lone third pixel gets a zero high nibble
/// assert_eq!(pack_indices(&[1, 2, 3], 3, 1), vec![0x21, 0x03]);
/// ```
pub fn pack_indices(indices: &[u8], width: u32, height: u32) -> Vec<u8> {
    let width = width as usize;
    let height = height as usize;
    debug_assert_eq!(indices.len(), width * height);

    let mut data = Vec::with_capacity(height * width.div_ceil(2));
    for row in indices.chunks_exact(width) {
        for pair in row.chunks(2) {
            let low = pair[0] & 0x0F;
            let high = pair.get(1).copied().unwrap_or(0);
            data.push((high << 4) | low);
        }
    }
    data
}

/// Inverse of [`pack_indices`], used to verify round-trips in tests.
#[cfg(test)]
pub(crate) fn unpack_indices(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    let width = width as usize;
    let height = height as usize;
    let row_bytes = width.div_ceil(2);

    let mut indices = Vec::with_capacity(width * height);
    for row in data.chunks_exact(row_bytes) {
        for x in 0..width {
            let byte = row[x / 2];
            indices.push(if x % 2 == 0 { byte & 0x0F } else { byte >> 4 });
        }
    }
    indices
}

/// Everything a firmware image asset needs: packed pixel data, the RGB565
/// palette, and the dimensions the packing format depends on.
///
/// Serializable so firmware tooling can round-trip the asset as JSON.
///
/// # Example
///
/// ```
/// use retro_palette::{Palette, PixelBuffer, Quantizer, Rgb888};
///
/// let quantizer = Quantizer::new(Palette::load("classic").unwrap());
/// let buffer = PixelBuffer::new(2, 1, vec![Rgb888::new(255, 255, 255); 2], None).unwrap();
/// let firmware = quantizer.quantize(&buffer).to_firmware();
///
/// assert_eq!(firmware.data.len(), 1);
/// assert_eq!(firmware.palette[1].to_string(), "0xFFFF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareImage {
    /// Image width in pixels (needed to locate row boundaries in `data`).
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Packed pixel data, two 4-bit palette indices per byte.
    pub data: Vec<u8>,
    /// The 16 palette entries in display-hardware RGB565 form.
    pub palette: [Rgb565; PALETTE_SIZE],
}

impl FirmwareImage {
    /// The palette as `0xNNNN` hex literals, ready for source emission.
    pub fn palette_hex(&self) -> Vec<String> {
        self.palette.iter().map(Rgb565::to_string).collect()
    }
}
