//! Squared Euclidean distance in RGB space and nearest-candidate search
//!
//! Quantization and model learning both assign colours to their closest
//! representative with the same tie rule, so the search lives here.

/// Squared Euclidean distance between two RGB points
pub fn squared_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let [ar, ag, ab] = a;
    let [br, bg, bb] = b;
    let [dr, dg, db] = [ar - br, ag - bg, ab - bb];
    db.mul_add(db, dr.mul_add(dr, dg * dg))
}

/// Index of the candidate closest to `target`
///
/// Only a strictly smaller distance replaces the current best, so ties
/// resolve to the lowest index. Returns `None` when there are no candidates.
pub fn nearest_index<I>(target: [f64; 3], candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = [f64; 3]>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = squared_distance(target, candidate);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
