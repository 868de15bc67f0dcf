#[cfg(test)]
mod _tests_rule_generation {
    use super::super::lebedev_rule::WeightNormalization;
    use super::super::rule_generation::*;
    use super::super::rule_order::RuleOrder;
    use crate::error::LebedevError;
    use crate::orbit::{GeneratorTriple, SymmetryClass};
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::PI;

    #[test]
    fn test_every_rule_has_its_point_count() {
        for order in RuleOrder::ALL {
            let rule = generate_rule(order).unwrap();
            assert_eq!(rule.len(), order.points());
            assert_eq!(rule.order(), order);
        }
    }

    #[test]
    fn test_every_point_is_on_the_unit_sphere() {
        for order in RuleOrder::ALL {
            let rule = generate_rule(order).unwrap();
            for p in &rule {
                let r2 = p.x() * p.x() + p.y() * p.y() + p.z() * p.z();
                assert!((r2 - 1.0).abs() < 1e-10, "{}: {:?}", order, p.position);
            }
        }
    }

    #[test]
    fn test_weights_sum_to_sphere_area() {
        for order in RuleOrder::ALL {
            let rule = generate_rule(order)
                .unwrap()
                .with_normalization(WeightNormalization::SurfaceArea);
            assert_relative_eq!(rule.weight_sum(), 4.0 * PI, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_literal_weights_sum_to_one() {
        for order in RuleOrder::ALL {
            let rule = generate_rule(order).unwrap();
            assert_relative_eq!(rule.weight_sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rules_with_negative_weights() {
        for order in [RuleOrder::N74, RuleOrder::N230, RuleOrder::N266] {
            let rule = generate_rule(order).unwrap();
            assert!(rule.iter().any(|p| p.weight < 0.0), "{}", order);
            assert_relative_eq!(rule.weight_sum(), 1.0, epsilon = 1e-12);
        }
        let rule = generate_rule(RuleOrder::N302).unwrap();
        assert!(rule.iter().all(|p| p.weight > 0.0));
    }

    #[test]
    fn test_six_point_rule() {
        let rule = generate_rule_by_order(6).unwrap();
        let expected = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ];
        assert_eq!(rule.len(), 6);
        for (p, e) in rule.iter().zip(expected) {
            assert_eq!(p.position, e);
            assert_eq!(p.weight, 0.1666666666666667);
        }
    }

    #[test]
    fn test_twenty_six_point_rule() {
        let table = RuleOrder::N26.table();
        let classes: Vec<SymmetryClass> = table.iter().map(|g| g.class).collect();
        assert_eq!(
            classes,
            vec![
                SymmetryClass::Axis,
                SymmetryClass::FaceDiagonal,
                SymmetryClass::BodyDiagonal
            ]
        );
        assert!(table.iter().all(|g| g.a == 0.0 && g.b == 0.0));

        let rule = generate_rule_by_order(26)
            .unwrap()
            .with_normalization(WeightNormalization::SurfaceArea);
        assert_eq!(rule.len(), 26);
        assert_relative_eq!(rule.weight_sum(), 4.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(rule.points()[0].weight, 0.4761904761904762e-1 * 4.0 * PI);
        assert_relative_eq!(rule.points()[6].weight, 0.3809523809523810e-1 * 4.0 * PI);
        assert_relative_eq!(rule.points()[18].weight, 0.3214285714285714e-1 * 4.0 * PI);
    }

    #[test]
    fn test_unsupported_order_produces_nothing() {
        let err = generate_rule_by_order(7).unwrap_err();
        assert_eq!(err, LebedevError::UnsupportedOrder { requested: 7 });
        assert!(err.to_string().contains("Unsupported Lebedev order 7"));
    }

    #[test]
    fn test_generate_for_precision() {
        let rule = generate_rule_for_precision(30).unwrap();
        assert_eq!(rule.order(), RuleOrder::N350);
        assert!(rule.precision() >= 30);
        assert!(generate_rule_for_precision(200).is_err());
    }

    #[test]
    fn test_generate_all_rules() {
        let rules = generate_all_rules().unwrap();
        assert_eq!(rules.len(), 32);
        for (rule, order) in rules.iter().zip(RuleOrder::ALL) {
            assert_eq!(rule.order(), order);
            assert_eq!(rule.len(), order.points());
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate_rule(RuleOrder::N590).unwrap();
        let second = generate_rule(RuleOrder::N590).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_table_is_reported() {
        // One generator short of the 14-point rule
        let table = [GeneratorTriple::axis(0.5)];
        let err = expand_table(RuleOrder::N14, &table).unwrap_err();
        assert_eq!(
            err,
            LebedevError::PointCountMismatch {
                order: 14,
                produced: 6
            }
        );
        assert!(err.is_data_integrity_fault());

        // Generator off the unit sphere
        let table = [GeneratorTriple::axis(0.5), GeneratorTriple::in_plane(1.2, 0.1)];
        let err = expand_table(RuleOrder::N14, &table).unwrap_err();
        assert!(matches!(err, LebedevError::NegativeRadicand { class: 5, .. }));
    }
}
