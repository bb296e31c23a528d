//! Markov chain colour synthesis from sample images
//!
//! Sample images are quantized to a small palette, directional colour
//! transitions between neighbouring pixels are counted and normalized into a
//! first-order model, and new images are sampled from that model in raster
//! order conditioned on each pixel's left and upper neighbours.

#![forbid(unsafe_code)]

/// Synthesis, weighted selection and pipeline orchestration
pub mod algorithm;
/// Colour quantization and transition model learning
pub mod analysis;
/// Colours, canonical colour keys and palettes
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Distance calculations in RGB space
pub mod math;
/// Pixel grid storage
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
