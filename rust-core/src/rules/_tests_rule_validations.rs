#[cfg(test)]
mod _tests_rule_validations {
    use super::super::lebedev_rule::{LebedevRule, WeightNormalization};
    use super::super::rule_generation::generate_rule;
    use super::super::rule_order::RuleOrder;
    use super::super::rule_validations::*;
    use crate::orbit::QuadraturePoint;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    // ==================== Exact sphere averages ====================

    #[test]
    fn test_exact_monomial_averages() {
        assert_relative_eq!(exact_monomial_average((0, 0, 0)), 1.0);
        assert_relative_eq!(exact_monomial_average((2, 0, 0)), 1.0 / 3.0);
        assert_relative_eq!(exact_monomial_average((0, 0, 4)), 1.0 / 5.0);
        assert_relative_eq!(exact_monomial_average((2, 2, 0)), 1.0 / 15.0);
        assert_relative_eq!(exact_monomial_average((2, 2, 2)), 1.0 / 105.0);
        assert_relative_eq!(exact_monomial_average((6, 0, 0)), 1.0 / 7.0);
        assert_eq!(exact_monomial_average((1, 0, 0)), 0.0);
        assert_eq!(exact_monomial_average((2, 3, 0)), 0.0);
    }

    #[test]
    fn test_six_point_moments() {
        let rule = generate_rule(RuleOrder::N6).unwrap();
        assert_relative_eq!(monomial_moment(&rule, (2, 0, 0)), 1.0 / 3.0, epsilon = 1e-15);
        // Degree 4 is beyond this rule: x^4 averages to 1/3 instead of 1/5
        assert_relative_eq!(monomial_moment(&rule, (4, 0, 0)), 1.0 / 3.0, epsilon = 1e-15);
    }

    // ==================== Full reports ====================

    #[test]
    fn test_every_rule_validates() {
        for order in RuleOrder::ALL {
            let rule = generate_rule(order).unwrap();
            let report = validate_rule(&rule, TOL);
            assert!(report.count_matches(), "{}", order);
            assert!(report.on_unit_sphere(), "{}", order);
            assert!(report.weights_sum_to_one(), "{}: {}", order, report.weight_sum);
            assert!(report.is_symmetric(), "{}: {:?}", order, report);
            assert!(report.is_exact(), "{}: {:?}", order, report.monomials);
            assert!(report.is_valid());
        }
    }

    #[test]
    fn test_monomials_respect_precision() {
        let report = validate_rule(&generate_rule(RuleOrder::N6).unwrap(), TOL);
        assert!(report.monomials.iter().all(|m| {
            let (i, j, k) = m.exponents;
            i + j + k <= 3
        }));

        let report = validate_rule(&generate_rule(RuleOrder::N110).unwrap(), TOL);
        assert_eq!(report.monomials.len(), 16);
    }

    #[test]
    fn test_report_counts_negative_weights() {
        let report = validate_rule(&generate_rule(RuleOrder::N74).unwrap(), TOL);
        // The body-diagonal orbit of the 74-point rule carries a negative weight
        assert_eq!(report.negative_weights, 8);
        assert!(report.is_valid());
    }

    #[test]
    fn test_validation_is_normalization_independent() {
        let rule = generate_rule(RuleOrder::N194)
            .unwrap()
            .with_normalization(WeightNormalization::SurfaceArea);
        let report = validate_rule(&rule, TOL);
        assert_relative_eq!(report.weight_sum, 1.0, epsilon = 1e-12);
        assert!(report.is_valid());
    }

    // ==================== Broken grids ====================

    #[test]
    fn test_missing_point_breaks_symmetry() {
        let rule = generate_rule(RuleOrder::N14).unwrap();
        let mut points = rule.into_points();
        points.pop();
        let broken = LebedevRule::new(RuleOrder::N14, points);

        let report = validate_rule(&broken, TOL);
        assert!(!report.count_matches());
        assert!(report.symmetry_violations > 0);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_changed_weight_is_detected() {
        let rule = generate_rule(RuleOrder::N26).unwrap();
        let mut points = rule.into_points();
        points[0].weight += 1e-3;
        let broken = LebedevRule::new(RuleOrder::N26, points);

        let report = validate_rule(&broken, TOL);
        assert!(report.count_matches());
        assert!(!report.weights_sum_to_one());
        assert!(!report.is_symmetric());
    }

    #[test]
    fn test_duplicate_and_off_sphere_points() {
        let mut points = generate_rule(RuleOrder::N6).unwrap().into_points();
        points[1] = points[0];
        points[2] = QuadraturePoint::new(0.0, 2.0, 0.0, points[2].weight);
        let broken = LebedevRule::new(RuleOrder::N6, points);

        let report = validate_rule(&broken, TOL);
        assert_eq!(report.duplicate_points, 1);
        assert!(!report.on_unit_sphere());
        assert!(!report.is_valid());
    }
}
