//! Tests for pixel grid construction and raster addressing

#[cfg(test)]
mod tests {
    use markovtile::AlgorithmError;
    use markovtile::color::Color;
    use markovtile::spatial::PixelGrid;

    fn gray(value: u8) -> Color {
        Color::new(value, value, value)
    }

    // Tests raster order maps to (x, y) addressing
    // Verified by transposing the storage shape
    #[test]
    fn test_from_raster_addressing() {
        let pixels = (0..6).map(gray).collect();
        let grid = PixelGrid::from_raster(3, 2, pixels).expect("valid grid");

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.get(0, 0), Some(gray(0)));
        assert_eq!(grid.get(2, 0), Some(gray(2)));
        assert_eq!(grid.get(0, 1), Some(gray(3)));
        assert_eq!(grid.get(2, 1), Some(gray(5)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    // Tests pixel iteration follows raster order
    // Verified by iterating columns first
    #[test]
    fn test_pixels_in_raster_order() {
        let grid = PixelGrid::from_rows(&[vec![gray(1), gray(2)], vec![gray(3), gray(4)]])
            .expect("valid grid");
        let pixels: Vec<Color> = grid.pixels().collect();
        assert_eq!(pixels, vec![gray(1), gray(2), gray(3), gray(4)]);
    }

    // Tests mismatched pixel count is a precondition violation
    // Verified by padding short input
    #[test]
    fn test_from_raster_rejects_wrong_count() {
        let result = PixelGrid::from_raster(2, 2, vec![gray(0); 3]);
        assert!(matches!(
            result,
            Err(AlgorithmError::PreconditionViolation { .. })
        ));
    }

    // Tests zero dimensions are rejected
    // Verified by allowing empty grids
    #[test]
    fn test_from_raster_rejects_zero_dimensions() {
        assert!(PixelGrid::from_raster(0, 2, Vec::new()).is_err());
        assert!(PixelGrid::from_raster(2, 0, Vec::new()).is_err());
        assert!(PixelGrid::from_rows(&[]).is_err());
    }

    // Tests ragged rows are rejected
    // Verified by using only the first row length
    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = PixelGrid::from_rows(&[vec![gray(0), gray(1)], vec![gray(2)]]);
        assert!(result.is_err());
    }

    // Tests filled grids are uniform
    // Verified by filling only the first row
    #[test]
    fn test_filled_grid() {
        let grid = PixelGrid::filled(4, 3, gray(9));
        assert_eq!(grid.dimensions(), (4, 3));
        assert!(grid.pixels().all(|pixel| pixel == gray(9)));
        assert_eq!(grid.as_array().len(), 12);
    }
}
