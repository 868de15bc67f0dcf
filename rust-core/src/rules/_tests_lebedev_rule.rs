#[cfg(test)]
mod _tests_lebedev_rule {
    use super::super::lebedev_rule::WeightNormalization;
    use super::super::rule_generation::generate_rule;
    use super::super::rule_order::RuleOrder;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_parallel_arrays_match_points() {
        let rule = generate_rule(RuleOrder::N50).unwrap();
        let (xs, ys, zs, ws) = (rule.xs(), rule.ys(), rule.zs(), rule.weights());
        assert_eq!(xs.len(), 50);
        assert_eq!(ws.len(), 50);
        for (i, p) in rule.iter().enumerate() {
            assert_eq!(xs[i], p.x());
            assert_eq!(ys[i], p.y());
            assert_eq!(zs[i], p.z());
            assert_eq!(ws[i], p.weight);
        }
    }

    #[test]
    fn test_default_normalization_is_unit() {
        let rule = generate_rule(RuleOrder::N14).unwrap();
        assert_eq!(rule.normalization(), WeightNormalization::Unit);
        assert_eq!(WeightNormalization::default(), WeightNormalization::Unit);
        assert_eq!(rule.points()[0].weight, 0.6666666666666667e-1);
    }

    #[test]
    fn test_surface_area_normalization() {
        let rule = generate_rule(RuleOrder::N74).unwrap();
        let unit_weights = rule.weights();
        let scaled = rule.with_normalization(WeightNormalization::SurfaceArea);

        assert_eq!(scaled.normalization(), WeightNormalization::SurfaceArea);
        assert_relative_eq!(scaled.weight_sum(), 4.0 * PI, epsilon = 1e-12);
        for (w, p) in unit_weights.iter().zip(scaled.iter()) {
            assert_relative_eq!(p.weight, w * 4.0 * PI);
            // Negative weights keep their sign
            assert_eq!(p.weight < 0.0, *w < 0.0);
        }
    }

    #[test]
    fn test_normalization_round_trip() {
        let rule = generate_rule(RuleOrder::N110).unwrap();
        let back = rule
            .clone()
            .with_normalization(WeightNormalization::SurfaceArea)
            .with_normalization(WeightNormalization::Unit);
        assert_eq!(back.normalization(), WeightNormalization::Unit);
        for (a, b) in rule.iter().zip(back.iter()) {
            assert_eq!(a.position, b.position);
            assert_relative_eq!(a.weight, b.weight, max_relative = 1e-15);
        }
    }

    #[test]
    fn test_same_normalization_is_a_no_op() {
        let rule = generate_rule(RuleOrder::N38).unwrap();
        let same = rule.clone().with_normalization(WeightNormalization::Unit);
        assert_eq!(rule, same);
    }

    #[test]
    fn test_into_points_and_metadata() {
        let rule = generate_rule(RuleOrder::N86).unwrap();
        assert_eq!(rule.precision(), 15);
        assert!(!rule.is_empty());
        let points = rule.into_points();
        assert_eq!(points.len(), 86);
    }

    #[test]
    fn test_serde_round_trip() {
        let rule = generate_rule(RuleOrder::N26).unwrap();
        let json = serde_json::to_string(&rule).unwrap();
        let decoded: super::super::lebedev_rule::LebedevRule = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.order(), RuleOrder::N26);
        assert_eq!(decoded.len(), 26);
    }
}
