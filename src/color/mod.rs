//! Color types and distance-metric color spaces.
//!
//! # Color formats
//!
//! - [`Rgb888`]: full-color input pixels, one byte per channel
//! - [`Rgb565`]: packed 16-bit firmware colors, derived by truncation
//!
//! # Distance spaces
//!
//! [`ColorSpace`] selects how palette matching measures dissimilarity:
//! perceptual (CIE Lab, default), linear RGB, or HSV with circular hue.
//!
//! # Example
//!
//! ```
//! use retro_palette::{ColorSpace, Rgb888};
//!
//! let space = ColorSpace::Perceptual;
//! let a = space.convert(Rgb888::new(255, 0, 0));
//! let b = space.convert(Rgb888::new(200, 0, 0));
//! assert!(space.distance(a, b) > 0.0);
//! ```

mod hsv;
mod lab;
mod rgb;
mod space;

pub use rgb::{Rgb565, Rgb888};
pub use space::{ColorSpace, UnsupportedColorSpaceError};
