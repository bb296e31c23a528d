//! Analysis modules turning sample images into a colour transition model

/// Transition counts and the normalized transition model
pub mod model;
/// Colour quantization by iterative centroid refinement
pub mod quantization;
/// Transition statistics learned from quantized sample grids
pub mod transitions;
