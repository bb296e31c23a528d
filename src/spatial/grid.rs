//! Fixed-size rectangular pixel grids
//!
//! Sample images are materialized into `PixelGrid`s before any stage runs,
//! and synthesis returns one. Storage is a row-major `Array2` indexed
//! `[row, col]`, so `(x, y)` maps to `[y, x]`.

use crate::color::Color;
use crate::io::error::{Result, precondition_violation};
use ndarray::Array2;

/// Rectangular array of colours with fixed width and height
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<Color>,
}

impl PixelGrid {
    /// Build a grid from pixels listed in raster order
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if either dimension is zero or the
    /// pixel count does not equal `width * height`.
    pub fn from_raster(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(precondition_violation(
                "pixel grid construction",
                &format!("dimensions {width}x{height} must be positive"),
            ));
        }

        let count = pixels.len();
        let pixels = Array2::from_shape_vec((height, width), pixels).map_err(|_shape_error| {
            precondition_violation(
                "pixel grid construction",
                &format!("{count} pixels cannot fill a {width}x{height} grid"),
            )
        })?;

        Ok(Self { pixels })
    }

    /// Build a grid from a list of equally long rows
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if there are no rows, a row is empty,
    /// or rows differ in length.
    pub fn from_rows(rows: &[Vec<Color>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(precondition_violation(
                "pixel grid construction",
                &"rows must all have the same length",
            ));
        }

        Self::from_raster(width, rows.len(), rows.concat())
    }

    /// Grid filled with a single colour
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), color),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Grid dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Colour at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.pixels.get([y, x]).copied()
    }

    /// All colours in raster order
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().copied()
    }

    /// Underlying row-major array
    pub const fn as_array(&self) -> &Array2<Color> {
        &self.pixels
    }
}
