//! Public API: the [`Quantizer`] builder and [`QuantizeError`] unified
//! error type.

mod builder;
mod error;

pub use builder::Quantizer;
pub use error::QuantizeError;
