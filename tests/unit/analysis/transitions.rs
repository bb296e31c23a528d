//! Tests for learning a transition model from sample grids

#[cfg(test)]
mod tests {
    use markovtile::AlgorithmError;
    use markovtile::analysis::transitions::{count_transitions, learn, quantize_grid};
    use markovtile::color::{Color, Palette};
    use markovtile::spatial::PixelGrid;

    const BLACK: Color = Color::new(0, 0, 0);
    const RED: Color = Color::new(255, 0, 0);

    fn striped() -> PixelGrid {
        PixelGrid::from_rows(&[vec![BLACK, RED], vec![BLACK, RED]]).expect("valid grid")
    }

    // Tests right and downward edges of a two column stripe
    // Verified by adding reciprocal left and upward edges
    #[test]
    fn test_learn_two_column_stripe() {
        let palette = Palette::new(vec![BLACK, RED]);
        let model = learn(&[striped()], &palette).expect("learn");

        assert_eq!(model.source_count(), 2);
        assert!((model.probability(BLACK.key(), RED.key()) - 2.0 / 3.0).abs() < 1e-12);
        assert!((model.probability(BLACK.key(), BLACK.key()) - 1.0 / 3.0).abs() < 1e-12);
        assert!((model.probability(RED.key(), RED.key()) - 1.0).abs() < 1e-12);
        assert!(model.probability(RED.key(), BLACK.key()).abs() < f64::EPSILON);
    }

    // Tests every interior edge is counted once
    // Verified by skipping the last row
    #[test]
    fn test_edge_count() {
        let grid = PixelGrid::filled(4, 3, BLACK);
        let counts = count_transitions(&grid, &Palette::new(vec![BLACK])).expect("count");
        assert_eq!(counts.total(), 3 * 3 + 4 * 2);
    }

    // Tests pixels snap to their nearest palette colour
    // Verified by keeping raw pixel colours
    #[test]
    fn test_pixels_snap_to_palette() {
        let grid = PixelGrid::from_rows(&[vec![Color::new(10, 5, 5), Color::new(240, 20, 0)]])
            .expect("valid grid");
        let keys = quantize_grid(&grid, &Palette::new(vec![BLACK, RED])).expect("quantize");

        assert_eq!(keys.get([0, 0]), Some(&BLACK.key()));
        assert_eq!(keys.get([0, 1]), Some(&RED.key()));
    }

    // Tests counts from several grids share one model
    // Verified by learning only the last grid
    #[test]
    fn test_counts_accumulate_across_grids() {
        let solid_red = PixelGrid::filled(2, 2, RED);
        let palette = Palette::new(vec![BLACK, RED]);
        let model = learn(&[striped(), solid_red], &palette).expect("learn");

        // red: 1 edge from the stripe plus 4 from the solid grid, all to red
        assert!((model.probability(RED.key(), RED.key()) - 1.0).abs() < 1e-12);
        assert!((model.probability(BLACK.key(), RED.key()) - 2.0 / 3.0).abs() < 1e-12);
    }

    // Tests learning twice gives identical models
    // Verified by shuffling enumeration order
    #[test]
    fn test_learning_is_deterministic() {
        let grids = [
            striped(),
            PixelGrid::from_rows(&[vec![RED, BLACK], vec![RED, RED]]).expect("valid grid"),
        ];
        let palette = Palette::new(vec![BLACK, RED]);

        let first = learn(&grids, &palette).expect("learn");
        let second = learn(&grids, &palette).expect("learn");
        assert_eq!(first, second);
    }

    // Tests contract breaches are precondition violations
    // Verified by silently cropping mismatched grids
    #[test]
    fn test_precondition_violations() {
        let palette = Palette::new(vec![BLACK]);
        assert!(matches!(
            learn(&[], &palette),
            Err(AlgorithmError::PreconditionViolation { .. })
        ));
        assert!(matches!(
            learn(&[striped()], &Palette::default()),
            Err(AlgorithmError::PreconditionViolation { .. })
        ));
        assert!(matches!(
            learn(&[striped(), PixelGrid::filled(3, 2, BLACK)], &palette),
            Err(AlgorithmError::PreconditionViolation { .. })
        ));
    }

    // Tests a single pixel grid yields no sources
    // Verified by recording self edges for isolated pixels
    #[test]
    fn test_single_pixel_grid_has_no_edges() {
        let model =
            learn(&[PixelGrid::filled(1, 1, RED)], &Palette::new(vec![RED])).expect("learn");
        assert!(model.is_empty());
    }
}
