#[cfg(test)]
mod _tests_octahedral_group {
    use super::super::octahedral_group::*;
    use super::super::symmetry_operations::SymmetryOperation;
    use nalgebra::Vector3;
    use std::collections::HashSet;

    use crate::config::SYMMETRY_TOLERANCE as TOL;

    #[test]
    fn test_group_has_48_distinct_operations() {
        let ops = generate_octahedral_operations();
        assert_eq!(ops.len(), 48);
        assert!(ops[0].is_identity(), "identity should come first");

        let distinct: HashSet<SymmetryOperation> = ops.iter().copied().collect();
        assert_eq!(distinct.len(), 48);
    }

    #[test]
    fn test_group_is_closed_under_composition_and_inverse() {
        let ops = generate_octahedral_operations();
        let set: HashSet<SymmetryOperation> = ops.iter().copied().collect();

        for g in &ops {
            assert!(set.contains(&g.inverse()));
            for h in &ops {
                assert!(
                    set.contains(&g.compose(h)),
                    "product of {:?} and {:?} left the group",
                    g.rotation(),
                    h.rotation()
                );
            }
        }
    }

    #[test]
    fn test_rotation_subgroup() {
        let rotations = generate_octahedral_rotations();
        assert_eq!(rotations.len(), 24);
        assert!(rotations.iter().all(|op| op.is_proper()));
    }

    #[test]
    fn test_element_orders() {
        let ops = generate_octahedral_operations();
        let count = |n: usize| ops.iter().filter(|op| op.order() == n).count();

        assert_eq!(count(1), 1);
        assert_eq!(count(2), 19);
        assert_eq!(count(3), 8);
        assert_eq!(count(4), 12);
        assert_eq!(count(6), 8);
    }

    #[test]
    fn test_orbit_sizes_of_special_points() {
        let ops = generate_octahedral_operations();
        let s2 = 0.5_f64.sqrt();
        let s3 = (1.0_f64 / 3.0).sqrt();

        assert_eq!(orbit_of(Vector3::new(1.0, 0.0, 0.0), &ops, TOL).len(), 6);
        assert_eq!(orbit_of(Vector3::new(0.0, s2, s2), &ops, TOL).len(), 12);
        assert_eq!(orbit_of(Vector3::new(s3, s3, s3), &ops, TOL).len(), 8);

        let a = 0.3_f64;
        let b = (1.0 - 2.0 * a * a).sqrt();
        assert_eq!(orbit_of(Vector3::new(a, a, b), &ops, TOL).len(), 24);

        let b = (1.0 - a * a).sqrt();
        assert_eq!(orbit_of(Vector3::new(a, b, 0.0), &ops, TOL).len(), 24);

        let (a, b) = (0.2_f64, 0.5_f64);
        let c = (1.0 - a * a - b * b).sqrt();
        assert_eq!(orbit_of(Vector3::new(a, b, c), &ops, TOL).len(), 48);
    }

    #[test]
    fn test_orbit_images_stay_on_sphere() {
        let ops = generate_octahedral_operations();
        let p = Vector3::new(0.2, 0.5, (1.0_f64 - 0.04 - 0.25).sqrt());
        for image in orbit_of(p, &ops, TOL) {
            assert!((image.norm() - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn test_generated_operations_pass_checked_construction() {
        for op in generate_octahedral_operations() {
            assert_eq!(SymmetryOperation::new(*op.rotation()), Some(op));
        }
    }
}
