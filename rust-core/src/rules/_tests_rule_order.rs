#[cfg(test)]
mod _tests_rule_order {
    use super::super::rule_order::RuleOrder;
    use crate::error::LebedevError;

    const SUPPORTED: [usize; 32] = [
        6, 14, 26, 38, 50, 74, 86, 110, 146, 170, 194, 230, 266, 302, 350, 434, 590, 770, 974,
        1202, 1454, 1730, 2030, 2354, 2702, 3074, 3470, 3890, 4334, 4802, 5294, 5810,
    ];

    #[test]
    fn test_all_orders_are_listed_in_order() {
        let points: Vec<usize> = RuleOrder::ALL.iter().map(|o| o.points()).collect();
        assert_eq!(points, SUPPORTED.to_vec());
        assert!(RuleOrder::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_point_count_round_trip() {
        for n in SUPPORTED {
            let order = RuleOrder::try_from(n).unwrap();
            assert_eq!(order.points(), n);
            assert_eq!(usize::from(order), n);
            assert_eq!(RuleOrder::from_points(n), Some(order));
        }
    }

    #[test]
    fn test_unsupported_point_counts() {
        for n in [0, 1, 5, 7, 13, 100, 386, 5811, usize::MAX] {
            assert_eq!(RuleOrder::from_points(n), None);
            let err = RuleOrder::try_from(n).unwrap_err();
            assert_eq!(err, LebedevError::UnsupportedOrder { requested: n });
            assert!(err.is_unsupported_request());
            assert!(!err.is_data_integrity_fault());
        }
    }

    #[test]
    fn test_precision_table() {
        assert_eq!(RuleOrder::N6.precision(), 3);
        assert_eq!(RuleOrder::N26.precision(), 7);
        assert_eq!(RuleOrder::N302.precision(), 29);
        assert_eq!(RuleOrder::N434.precision(), 35);
        assert_eq!(RuleOrder::N5810.precision(), 131);
        assert!(RuleOrder::ALL.windows(2).all(|w| w[0].precision() < w[1].precision()));
    }

    #[test]
    fn test_for_precision_picks_smallest_sufficient_rule() {
        assert_eq!(RuleOrder::for_precision(0).unwrap(), RuleOrder::N6);
        assert_eq!(RuleOrder::for_precision(3).unwrap(), RuleOrder::N6);
        assert_eq!(RuleOrder::for_precision(4).unwrap(), RuleOrder::N14);
        assert_eq!(RuleOrder::for_precision(33).unwrap(), RuleOrder::N434);
        assert_eq!(RuleOrder::for_precision(131).unwrap(), RuleOrder::N5810);
    }

    #[test]
    fn test_for_precision_above_maximum() {
        let err = RuleOrder::for_precision(132).unwrap_err();
        assert_eq!(
            err,
            LebedevError::UnsupportedPrecision {
                requested: 132,
                max: 131
            }
        );
    }

    #[test]
    fn test_generator_counts() {
        assert_eq!(RuleOrder::N6.generator_count(), 1);
        assert_eq!(RuleOrder::N26.generator_count(), 3);
        assert_eq!(RuleOrder::N5810.generator_count(), 144);
        let total: usize = RuleOrder::ALL.iter().map(|o| o.generator_count()).sum();
        assert_eq!(total, 1287);
    }

    #[test]
    fn test_tables_expand_to_their_point_count() {
        for order in RuleOrder::ALL {
            let count: usize = order.table().iter().map(|g| g.orbit_size()).sum();
            assert_eq!(count, order.points(), "{}", order);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RuleOrder::N110.to_string(), "110-point rule");
    }
}
