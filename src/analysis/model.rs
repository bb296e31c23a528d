//! Directional colour transition model
//!
//! Counts are accumulated as integers and only normalized once every sample
//! has been scanned. Both maps are ordered by `ColorKey`, which gives
//! synthesis a stable enumeration order for weighted sampling.

use crate::color::ColorKey;
use crate::io::configuration::PROBABILITY_TOLERANCE;
use crate::io::error::{Result, model_format_error};
use std::collections::BTreeMap;

/// Outgoing probability distribution of one source colour
pub type Distribution = BTreeMap<ColorKey, f64>;

/// Integer transition counts keyed by (source, destination)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionCounts {
    counts: BTreeMap<ColorKey, BTreeMap<ColorKey, u64>>,
}

impl TransitionCounts {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Record one directed edge
    pub fn record(&mut self, source: ColorKey, destination: ColorKey) {
        *self
            .counts
            .entry(source)
            .or_default()
            .entry(destination)
            .or_insert(0) += 1;
    }

    /// Fold another accumulator into this one
    pub fn merge(&mut self, other: Self) {
        for (source, destinations) in other.counts {
            let entry = self.counts.entry(source).or_default();
            for (destination, count) in destinations {
                *entry.entry(destination).or_insert(0) += count;
            }
        }
    }

    /// Count recorded for a single edge
    pub fn count(&self, source: ColorKey, destination: ColorKey) -> u64 {
        self.counts
            .get(&source)
            .and_then(|destinations| destinations.get(&destination))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of recorded edges
    pub fn total(&self) -> u64 {
        self.counts.values().flat_map(BTreeMap::values).sum()
    }

    /// Divide every count by its source's total
    pub fn normalize(&self) -> TransitionModel {
        let transitions = self
            .counts
            .iter()
            .filter_map(|(&source, destinations)| {
                let total: u64 = destinations.values().sum();
                (total > 0).then(|| {
                    let distribution = destinations
                        .iter()
                        .map(|(&destination, &count)| (destination, count as f64 / total as f64))
                        .collect();
                    (source, distribution)
                })
            })
            .collect();

        TransitionModel { transitions }
    }
}

/// Per-source normalized transition probabilities over palette colours
///
/// Every present source has a distribution summing to 1. Colours that were
/// never the origin of an edge are absent rather than mapped to nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionModel {
    transitions: BTreeMap<ColorKey, Distribution>,
}

impl TransitionModel {
    /// Rebuild a model from (source, destination, probability) records
    ///
    /// Repeated records for the same edge are summed.
    ///
    /// # Errors
    ///
    /// Returns a model format error if a probability lies outside [0, 1] or a
    /// source distribution does not sum to 1 within tolerance.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ColorKey, ColorKey, f64)>,
    {
        let mut transitions: BTreeMap<ColorKey, Distribution> = BTreeMap::new();
        for (source, destination, probability) in records {
            if !(0.0..=1.0).contains(&probability) {
                return Err(model_format_error(&format!(
                    "probability {probability} for {source} -> {destination} is outside [0, 1]"
                )));
            }
            *transitions
                .entry(source)
                .or_default()
                .entry(destination)
                .or_insert(0.0) += probability;
        }

        for (source, distribution) in &transitions {
            let total: f64 = distribution.values().sum();
            if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
                return Err(model_format_error(&format!(
                    "distribution for {source} sums to {total}"
                )));
            }
        }

        Ok(Self { transitions })
    }

    /// True when no source colour has outgoing transitions
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Number of source colours
    pub fn source_count(&self) -> usize {
        self.transitions.len()
    }

    /// Source colours in key order
    pub fn sources(&self) -> impl Iterator<Item = ColorKey> + '_ {
        self.transitions.keys().copied()
    }

    /// Outgoing distribution of `source`, if it has one
    pub fn distribution(&self, source: ColorKey) -> Option<&Distribution> {
        self.transitions.get(&source)
    }

    /// Probability of moving from `source` to `destination`
    pub fn probability(&self, source: ColorKey, destination: ColorKey) -> f64 {
        self.distribution(source)
            .and_then(|distribution| distribution.get(&destination))
            .copied()
            .unwrap_or(0.0)
    }

    /// All (source, destination, probability) records in key order
    pub fn records(&self) -> impl Iterator<Item = (ColorKey, ColorKey, f64)> + '_ {
        self.transitions.iter().flat_map(|(&source, distribution)| {
            distribution
                .iter()
                .map(move |(&destination, &probability)| (source, destination, probability))
        })
    }
}
