//! Palette types: presets, the fixed 16-slot store, and nearest-color
//! matching.

mod error;
mod matcher;
mod palette;
mod presets;

pub use error::{PaletteError, ParseColorError};
pub use matcher::NearestMatcher;
pub use palette::{Palette, PALETTE_SIZE, TRANSPARENT_INDEX};
pub use presets::Preset;
