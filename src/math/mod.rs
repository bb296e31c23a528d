//! Mathematical utilities for the algorithm

/// Squared RGB distance and nearest-candidate search
pub mod distance;
