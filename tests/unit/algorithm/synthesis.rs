//! Tests for raster-order synthesis and neighbour distribution merging

#[cfg(test)]
mod tests {
    use markovtile::AlgorithmError;
    use markovtile::algorithm::synthesis::{generate, merged_candidates};
    use markovtile::analysis::model::{TransitionCounts, TransitionModel};
    use markovtile::color::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BLACK: Color = Color::new(0, 0, 0);
    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn black_to_red_only() -> TransitionModel {
        let mut counts = TransitionCounts::new();
        counts.record(BLACK.key(), RED.key());
        counts.normalize()
    }

    fn mixed_model() -> TransitionModel {
        TransitionModel::from_records([
            (BLACK.key(), RED.key(), 0.5),
            (BLACK.key(), BLACK.key(), 0.5),
            (RED.key(), RED.key(), 1.0),
        ])
        .expect("valid model")
    }

    // Tests neighbour distributions are summed without renormalization
    // Verified by averaging the two distributions
    #[test]
    fn test_merged_candidates_additive() {
        let merged = merged_candidates(&mixed_model(), Some(BLACK), Some(RED));

        assert_eq!(merged.len(), 2);
        assert!((merged[&BLACK.key()] - 0.5).abs() < 1e-12);
        assert!((merged[&RED.key()] - 1.5).abs() < 1e-12);
    }

    // Tests unknown or missing neighbours contribute nothing
    // Verified by inserting a uniform prior for unknown colours
    #[test]
    fn test_merged_candidates_unknown_neighbours() {
        let model = mixed_model();
        assert!(merged_candidates(&model, None, None).is_empty());
        assert!(merged_candidates(&model, Some(BLUE), None).is_empty());

        let left_only = merged_candidates(&model, Some(RED), Some(BLUE));
        assert_eq!(left_only.len(), 1);
        assert!((left_only[&RED.key()] - 1.0).abs() < 1e-12);
    }

    // Tests fallback to a source colour when neighbours have no transitions
    // Verified by reusing the left colour as the fallback
    #[test]
    fn test_fallback_when_no_evidence() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate(&black_to_red_only(), 3, 1, &mut rng).expect("generate");

        // Black is the only source, red never starts a transition
        let row: Vec<Color> = grid.pixels().collect();
        assert_eq!(row, vec![BLACK, RED, BLACK]);
    }

    // Tests every cell is populated with a model colour
    // Verified by leaving the first pixel unset
    #[test]
    fn test_output_complete_and_in_palette() {
        let model = mixed_model();
        let mut rng = StdRng::seed_from_u64(8);
        let grid = generate(&model, 7, 5, &mut rng).expect("generate");

        assert_eq!(grid.dimensions(), (7, 5));
        assert_eq!(grid.pixels().count(), 35);
        assert!(grid.pixels().all(|pixel| pixel == BLACK || pixel == RED));
    }

    // Tests red is absorbing once it appears to the left and above
    // Verified by sampling from the above neighbour only
    #[test]
    fn test_absorbing_color_propagates() {
        let model = mixed_model();
        let mut rng = StdRng::seed_from_u64(21);
        let grid = generate(&model, 6, 6, &mut rng).expect("generate");

        for y in 0..6 {
            for x in 1..6 {
                let left = grid.get(x - 1, y);
                let above = if y > 0 { grid.get(x, y - 1) } else { Some(RED) };
                if left == Some(RED) && above == Some(RED) {
                    assert_eq!(grid.get(x, y), Some(RED), "cell ({x}, {y})");
                }
            }
        }
    }

    // Tests identical seeds reproduce identical images
    // Verified by seeding from entropy
    #[test]
    fn test_seeded_generation_reproducible() {
        let model = mixed_model();
        let first = generate(&model, 8, 8, &mut StdRng::seed_from_u64(4)).expect("generate");
        let second = generate(&model, 8, 8, &mut StdRng::seed_from_u64(4)).expect("generate");
        assert_eq!(first, second);
    }

    // Tests wide outputs are generated and overflowing sizes rejected
    // Verified by capping the output width
    #[test]
    fn test_output_size_limits() {
        let mut rng = StdRng::seed_from_u64(6);
        let wide = generate(&mixed_model(), 10_001, 1, &mut rng).expect("generate");
        assert_eq!(wide.dimensions(), (10_001, 1));

        assert!(matches!(
            generate(&mixed_model(), usize::MAX, 2, &mut rng),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
    }

    // Tests empty models and zero sizes are rejected
    // Verified by returning an empty grid
    #[test]
    fn test_invalid_requests() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(&TransitionModel::default(), 2, 2, &mut rng),
            Err(AlgorithmError::ModelNotReady)
        ));
        assert!(matches!(
            generate(&mixed_model(), 0, 2, &mut rng),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
        assert!(matches!(
            generate(&mixed_model(), 2, 0, &mut rng),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
    }
}
