//! Ordered palette of representative colours

use crate::color::Color;
use crate::math::distance::nearest_index;
use std::collections::HashSet;

/// Ordered sequence of representative colours
///
/// Produced fresh by each quantization run and never mutated afterwards.
/// Clustering may collapse two centroids onto the same colour; such
/// duplicates are kept so the palette length matches the requested count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Wrap an ordered list of colours
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Distinct colours of `pixels` in order of first occurrence
    pub fn distinct(pixels: &[Color]) -> Self {
        let mut seen = HashSet::with_capacity(pixels.len().min(1024));
        let colors = pixels
            .iter()
            .copied()
            .filter(|color| seen.insert(*color))
            .collect();
        Self { colors }
    }

    /// Palette entries in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the palette has no entries
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry closest to `target` by squared RGB distance
    ///
    /// Ties resolve to the earliest entry. Returns `None` for an empty palette.
    pub fn nearest(&self, target: Color) -> Option<Color> {
        let index = nearest_index(target.channels(), self.colors.iter().map(|c| c.channels()))?;
        self.colors.get(index).copied()
    }
}
