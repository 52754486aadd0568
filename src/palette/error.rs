//! Error types for palette operations.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette loading and mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Palette name is not one of the registered presets.
    #[error("unknown palette `{name}` (available: classic, gameboy, sepia, neon)")]
    UnknownPreset {
        /// The unrecognized preset name
        name: String,
    },

    /// Palette slot index outside the fixed 16-entry range.
    #[error("palette index {index} out of range (valid: 0..=15)")]
    IndexOutOfRange {
        /// The offending slot index
        index: usize,
    },

    /// An explicit palette override did not contain exactly 16 colors.
    #[error("palette must contain exactly 16 colors, got {count}")]
    WrongColorCount {
        /// Number of colors supplied
        count: usize,
    },

    /// Invalid hex color string in an explicit palette override.
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
