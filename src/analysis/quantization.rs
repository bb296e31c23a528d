//! Colour quantization by iterative centroid refinement
//!
//! Reduces the pooled pixels of every sample image to a small palette.
//! Centroids are seeded by sampling pixels uniformly with replacement,
//! then refined Lloyd-style until they settle or the pass cap is reached.

use crate::color::{Color, Palette};
use crate::io::configuration::{CONVERGENCE_THRESHOLD, QUANTIZATION_MAX_ITERATIONS};
use crate::io::error::{Result, precondition_violation};
use crate::math::distance::{nearest_index, squared_distance};
use rand::Rng;

/// Outcome of centroid refinement, kept for diagnostics and tests
#[derive(Clone, Debug, PartialEq)]
pub struct Clustering {
    /// Final centroid positions with fractional channels
    pub centroids: Vec<[f64; 3]>,
    /// Number of refinement passes performed
    pub iterations: usize,
    /// Whether refinement stopped because no centroid moved past the threshold
    pub converged: bool,
}

/// Reduce `pixels` to a palette of at most `k` colours
///
/// When there are fewer than `k` distinct colours the distinct set is
/// returned in order of first occurrence. Otherwise exactly `k` clustered
/// colours are returned, possibly with duplicates if clusters collapse.
///
/// # Errors
///
/// Returns a precondition violation if `k` is zero or `pixels` is empty.
pub fn quantize<R: Rng + ?Sized>(pixels: &[Color], k: usize, rng: &mut R) -> Result<Palette> {
    check_inputs(pixels, k)?;

    let distinct = Palette::distinct(pixels);
    if distinct.len() < k {
        return Ok(distinct);
    }

    let clustering = refine_centroids(pixels, k, rng)?;
    Ok(Palette::new(
        clustering
            .centroids
            .into_iter()
            .map(Color::from_channels)
            .collect(),
    ))
}

/// Run centroid refinement without the distinct-colour shortcut
///
/// # Errors
///
/// Returns a precondition violation if `k` is zero or `pixels` is empty.
pub fn refine_centroids<R: Rng + ?Sized>(
    pixels: &[Color],
    k: usize,
    rng: &mut R,
) -> Result<Clustering> {
    check_inputs(pixels, k)?;

    let points: Vec<[f64; 3]> = pixels.iter().map(|p| p.channels()).collect();
    let seeds = seed_centroids(&points, k, rng);
    refine_from_seeds(pixels, seeds, QUANTIZATION_MAX_ITERATIONS)
}

/// Refine the given starting centroids for at most `max_passes` passes
///
/// A centroid that attracts no pixels in a pass keeps its previous value.
///
/// # Errors
///
/// Returns a precondition violation if `seeds` or `pixels` is empty.
pub fn refine_from_seeds(
    pixels: &[Color],
    seeds: Vec<[f64; 3]>,
    max_passes: usize,
) -> Result<Clustering> {
    check_inputs(pixels, seeds.len())?;

    let points: Vec<[f64; 3]> = pixels.iter().map(|p| p.channels()).collect();
    let mut centroids = seeds;

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_passes {
        iterations += 1;
        let (sums, counts) = assign_points(&points, &centroids);

        let mut moved = false;
        for ((centroid, sum), &count) in centroids.iter_mut().zip(&sums).zip(&counts) {
            if count == 0 {
                continue;
            }
            let n = count as f64;
            let updated = sum.map(|channel| channel / n);
            if squared_distance(updated, *centroid) > CONVERGENCE_THRESHOLD {
                moved = true;
            }
            *centroid = updated;
        }

        if !moved {
            converged = true;
            break;
        }
    }

    Ok(Clustering {
        centroids,
        iterations,
        converged,
    })
}

fn check_inputs(pixels: &[Color], k: usize) -> Result<()> {
    if k == 0 {
        return Err(precondition_violation(
            "quantize",
            &"requested colour count must be at least 1",
        ));
    }
    if pixels.is_empty() {
        return Err(precondition_violation(
            "quantize",
            &"pixel list must not be empty",
        ));
    }
    Ok(())
}

fn seed_centroids<R: Rng + ?Sized>(points: &[[f64; 3]], k: usize, rng: &mut R) -> Vec<[f64; 3]> {
    (0..k)
        .filter_map(|_| points.get(rng.random_range(0..points.len())).copied())
        .collect()
}

/// Per-centroid channel sums and member counts for the nearest assignment
fn assign_points(points: &[[f64; 3]], centroids: &[[f64; 3]]) -> (Vec<[f64; 3]>, Vec<usize>) {
    let mut sums = vec![[0.0; 3]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for &point in points {
        let Some(index) = nearest_index(point, centroids.iter().copied()) else {
            continue;
        };
        if let (Some(sum), Some(count)) = (sums.get_mut(index), counts.get_mut(index)) {
            for (total, channel) in sum.iter_mut().zip(point) {
                *total += channel;
            }
            *count += 1;
        }
    }

    (sums, counts)
}
