//! Spatial data structures for sample and generated images

/// Fixed-size rectangular pixel grids
pub mod grid;

pub use grid::PixelGrid;
