//! Learning transition statistics from quantized sample grids

use crate::analysis::model::{TransitionCounts, TransitionModel};
use crate::color::{Color, ColorKey, Palette};
use crate::io::error::{Result, computation_error, precondition_violation};
use crate::spatial::PixelGrid;
use ndarray::Array2;

/// Build a transition model from sample grids and a palette
///
/// Each pixel is snapped to its nearest palette colour. Every cell then
/// records an edge to its right neighbour and to the neighbour below when
/// they exist. Counts from all grids share one accumulator before being
/// normalized per source colour.
///
/// # Errors
///
/// Returns a precondition violation if `grids` or `palette` is empty, or if
/// the grids do not all share the same dimensions.
pub fn learn(grids: &[PixelGrid], palette: &Palette) -> Result<TransitionModel> {
    let Some(first) = grids.first() else {
        return Err(precondition_violation(
            "learn",
            &"at least one sample grid is required",
        ));
    };
    if palette.is_empty() {
        return Err(precondition_violation("learn", &"palette must not be empty"));
    }

    let expected = first.dimensions();
    if let Some((index, grid)) = grids
        .iter()
        .enumerate()
        .find(|(_, grid)| grid.dimensions() != expected)
    {
        let (width, height) = grid.dimensions();
        return Err(precondition_violation(
            "learn",
            &format!(
                "grid {index} is {width}x{height}, expected {}x{}",
                expected.0, expected.1
            ),
        ));
    }

    let mut counts = TransitionCounts::new();
    for grid in grids {
        counts.merge(count_transitions(grid, palette)?);
    }

    Ok(counts.normalize())
}

/// Count right and downward edges of a single grid
///
/// # Errors
///
/// Returns a precondition violation if `palette` is empty.
pub fn count_transitions(grid: &PixelGrid, palette: &Palette) -> Result<TransitionCounts> {
    let keys = quantize_grid(grid, palette)?;
    let (rows, cols) = keys.dim();
    let mut counts = TransitionCounts::new();

    for row in 0..rows {
        for col in 0..cols {
            let Some(&source) = keys.get([row, col]) else {
                continue;
            };
            if let Some(&right) = keys.get([row, col + 1]) {
                counts.record(source, right);
            }
            if let Some(&below) = keys.get([row + 1, col]) {
                counts.record(source, below);
            }
        }
    }

    Ok(counts)
}

/// Replace every pixel with the key of its nearest palette colour
///
/// # Errors
///
/// Returns a precondition violation if `palette` is empty.
pub fn quantize_grid(grid: &PixelGrid, palette: &Palette) -> Result<Array2<ColorKey>> {
    let pixels = grid.as_array();
    let keys = pixels
        .iter()
        .map(|&color| {
            palette
                .nearest(color)
                .map(Color::key)
                .ok_or_else(|| precondition_violation("learn", &"palette must not be empty"))
        })
        .collect::<Result<Vec<_>>>()?;

    Array2::from_shape_vec(pixels.raw_dim(), keys)
        .map_err(|shape_error| computation_error("grid quantization", &shape_error))
}
