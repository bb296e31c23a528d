//! Colour values, canonical keys and palettes

/// Palette of representative colours produced by quantization
pub mod palette;
/// RGB colour triples and their canonical model keys
pub mod rgb;

pub use palette::Palette;
pub use rgb::{Color, ColorKey};
