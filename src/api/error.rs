//! Unified error type for the public API.

use thiserror::Error;

use crate::color::UnsupportedColorSpaceError;
use crate::palette::{PaletteError, ParseColorError};
use crate::quantize::BufferError;

/// Unified error type wrapping every failure the crate can surface.
///
/// All failures are fatal and deterministic: the pipeline is pure, so a
/// retry would reproduce the identical failure. Nothing is retried or
/// silently defaulted; errors propagate to the caller as typed values.
///
/// # Example
///
/// ```
/// use retro_palette::{Palette, QuantizeError};
///
/// fn load(name: &str) -> Result<Palette, QuantizeError> {
///     Ok(Palette::load(name)?)
/// }
///
/// assert!(load("classic").is_ok());
/// assert!(load("teletext").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantizeError {
    /// Palette loading or mutation failed.
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Input pixel buffer was malformed.
    #[error("input buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Distance-metric mode name was not recognized.
    #[error(transparent)]
    ColorSpace(#[from] UnsupportedColorSpaceError),
}

impl From<ParseColorError> for QuantizeError {
    fn from(err: ParseColorError) -> Self {
        QuantizeError::Palette(PaletteError::ParseColor(err))
    }
}
