//! Raster-order image synthesis from a transition model
//!
//! Pixels are produced row by row, left to right. Each pixel after the first
//! is sampled from the combined outgoing distributions of the already chosen
//! pixels to its left and above.
//!
//! The two neighbour distributions are added together without weighting or
//! renormalization. Colours favoured by both neighbours therefore get their
//! probability counted twice. The result is not a joint conditional model.

use crate::algorithm::selection::{uniform_choice, weighted_choice};
use crate::analysis::model::{Distribution, TransitionModel};
use crate::color::{Color, ColorKey};
use crate::io::error::{AlgorithmError, Result, computation_error, invalid_parameter};
use crate::spatial::PixelGrid;
use rand::Rng;

/// Generate a `width` x `height` grid from `model`
///
/// The top-left pixel is a uniformly chosen source colour. Pixels whose
/// neighbours have no outgoing transitions fall back to a uniformly chosen
/// source colour as well.
///
/// # Errors
///
/// Returns:
/// - `ModelNotReady` if `model` has no source colours
/// - `InvalidParameter` if a dimension is zero or the cell count overflows `usize`
pub fn generate<R: Rng + ?Sized>(
    model: &TransitionModel,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<PixelGrid> {
    if model.is_empty() {
        return Err(AlgorithmError::ModelNotReady);
    }
    check_dimension("output width", width)?;
    check_dimension("output height", height)?;

    let cell_count = width.checked_mul(height).ok_or_else(|| {
        invalid_parameter(
            "output size",
            &format!("{width}x{height}"),
            &"cell count overflows",
        )
    })?;

    let sources: Vec<ColorKey> = model.sources().collect();
    let mut cells: Vec<Color> = Vec::with_capacity(cell_count);

    for y in 0..height {
        for x in 0..width {
            let left = if x > 0 { cells.last().copied() } else { None };
            let above = if y > 0 {
                cells.get(cells.len() - width).copied()
            } else {
                None
            };

            let mut candidates = merged_candidates(model, left, above);
            if candidates.is_empty() {
                if let Some(fallback) = uniform_choice(&sources, rng) {
                    candidates.insert(fallback, 1.0);
                }
            }

            let chosen = weighted_choice(&candidates, rng).ok_or_else(|| {
                computation_error("synthesis", &format!("no candidate colour at ({x}, {y})"))
            })?;
            cells.push(chosen.color());
        }
    }

    PixelGrid::from_raster(width, height, cells)
}

/// Sum the outgoing distributions of the left and upper neighbours
///
/// Neighbours that are absent, or whose colour never started a transition,
/// contribute nothing. An empty result means the caller must fall back.
pub fn merged_candidates(
    model: &TransitionModel,
    left: Option<Color>,
    above: Option<Color>,
) -> Distribution {
    let mut merged = Distribution::new();
    for neighbour in [left, above].into_iter().flatten() {
        let Some(distribution) = model.distribution(neighbour.key()) else {
            continue;
        };
        for (&destination, &probability) in distribution {
            *merged.entry(destination).or_insert(0.0) += probability;
        }
    }
    merged
}

pub(crate) fn check_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    Ok(())
}
