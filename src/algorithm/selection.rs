//! Seeded stochastic choices over colour keys
//!
//! Candidates are always enumerated in `ColorKey` order so that a given
//! random stream reproduces the same choices.

use crate::analysis::model::Distribution;
use crate::color::ColorKey;
use rand::Rng;

/// Pick a key with probability proportional to its weight
///
/// Draws a value in `[0, total)` and returns the first key whose cumulative
/// weight meets or exceeds it. Returns `None` when there are no candidates
/// or the total weight is not positive.
pub fn weighted_choice<R: Rng + ?Sized>(
    candidates: &Distribution,
    rng: &mut R,
) -> Option<ColorKey> {
    let total: f64 = candidates.values().sum();
    if candidates.is_empty() || total <= 0.0 || !total.is_finite() {
        return None;
    }

    let draw = rng.random::<f64>() * total;
    select_by_draw(candidates, draw)
}

/// Resolve a draw against the cumulative weights of `candidates`
///
/// Floating point shortfall on the final entry falls through to the last
/// key rather than returning nothing.
pub fn select_by_draw(candidates: &Distribution, draw: f64) -> Option<ColorKey> {
    let mut cumulative = 0.0;
    for (&key, &weight) in candidates {
        cumulative += weight;
        if draw <= cumulative {
            return Some(key);
        }
    }
    candidates.keys().next_back().copied()
}

/// Pick one key uniformly at random
pub fn uniform_choice<R: Rng + ?Sized>(keys: &[ColorKey], rng: &mut R) -> Option<ColorKey> {
    if keys.is_empty() {
        return None;
    }
    keys.get(rng.random_range(0..keys.len())).copied()
}
