//! Synthesis algorithm and pipeline orchestration

/// Stage orchestration, boundary validation and session state
pub mod pipeline;
/// Seeded weighted and uniform choices over colour keys
pub mod selection;
/// Raster-order image synthesis from a transition model
pub mod synthesis;
