#[cfg(test)]
mod _tests_orbit_expansion {
    use super::super::orbit_expansion::{expand_orbit, GeneratorTriple};
    use super::super::quadrature_point::QuadraturePoint;
    use super::super::symmetry_class::SymmetryClass;
    use crate::error::LebedevError;
    use crate::symmetries::{generate_octahedral_operations, orbit_of};
    use nalgebra::Vector3;

    use crate::config::SYMMETRY_TOLERANCE as TOL;

    fn contains(points: &[QuadraturePoint], x: f64, y: f64, z: f64) -> bool {
        let target = Vector3::new(x, y, z);
        points.iter().any(|p| (p.position - target).norm() < TOL)
    }

    fn assert_distinct(points: &[QuadraturePoint]) {
        for (i, p) in points.iter().enumerate() {
            for q in &points[i + 1..] {
                assert!(
                    (p.position - q.position).norm() > TOL,
                    "duplicate point {:?}",
                    p.position
                );
            }
        }
    }

    /// A single orbit must coincide with the Oh images of its first point.
    fn assert_closed_orbit(points: &[QuadraturePoint]) {
        let ops = generate_octahedral_operations();
        let images = orbit_of(points[0].position, &ops, TOL);
        assert_eq!(images.len(), points.len());
        for image in images {
            assert!(contains(points, image.x, image.y, image.z));
        }
    }

    // ==================== Orbit sizes ====================

    #[test]
    fn test_orbit_sizes_per_class() {
        let cases = [
            (1, 0.0, 0.0, 6),
            (2, 0.0, 0.0, 12),
            (3, 0.0, 0.0, 8),
            (4, 0.4, 0.0, 24),
            (5, 0.4, 0.0, 24),
            (6, 0.3, 0.5, 48),
        ];
        for (code, a, b, expected) in cases {
            let points = expand_orbit(code, a, b, 1.0).unwrap();
            assert_eq!(points.len(), expected, "class {}", code);
            assert_eq!(SymmetryClass::from_code(code).unwrap().orbit_size(), expected);
            assert_distinct(&points);
            assert_closed_orbit(&points);
        }
    }

    // ==================== Individual classes ====================

    #[test]
    fn test_axis_class_ignores_inputs() {
        for (a, b) in [(0.0, 0.0), (0.7, 0.2), (-3.0, 12.0)] {
            let points = expand_orbit(1, a, b, 0.125).unwrap();
            assert_eq!(points.len(), 6);
            let expected = [
                (1.0, 0.0, 0.0),
                (-1.0, 0.0, 0.0),
                (0.0, 1.0, 0.0),
                (0.0, -1.0, 0.0),
                (0.0, 0.0, 1.0),
                (0.0, 0.0, -1.0),
            ];
            for (p, (x, y, z)) in points.iter().zip(expected) {
                assert_eq!(p.position, Vector3::new(x, y, z));
                assert_eq!(p.weight, 0.125);
            }
        }
    }

    #[test]
    fn test_face_diagonal_order() {
        let a = 0.5_f64.sqrt();
        let points = expand_orbit(2, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(points[0].position, Vector3::new(0.0, a, a));
        assert_eq!(points[1].position, Vector3::new(0.0, -a, a));
        assert_eq!(points[2].position, Vector3::new(0.0, a, -a));
        assert_eq!(points[3].position, Vector3::new(0.0, -a, -a));
        assert_eq!(points[4].position, Vector3::new(a, 0.0, a));
        assert_eq!(points[8].position, Vector3::new(a, a, 0.0));
        assert_eq!(points[11].position, Vector3::new(-a, -a, 0.0));
    }

    #[test]
    fn test_body_diagonal_covers_all_octants() {
        let a = (1.0_f64 / 3.0).sqrt();
        let points = expand_orbit(3, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(points[0].position, Vector3::new(a, a, a));
        assert_eq!(points[7].position, Vector3::new(-a, -a, -a));
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    assert!(contains(&points, sx * a, sy * a, sz * a));
                }
            }
        }
    }

    #[test]
    fn test_two_equal_derives_b() {
        let a = 0.3_f64;
        let b = (1.0 - 2.0 * a * a).sqrt();
        let points = expand_orbit(4, a, 0.9, 1.0).unwrap();
        assert_eq!(points[0].position, Vector3::new(a, a, b));
        assert_eq!(points[8].position, Vector3::new(a, b, a));
        assert_eq!(points[16].position, Vector3::new(b, a, a));
        assert_eq!(points[23].position, Vector3::new(-b, -a, -a));
    }

    #[test]
    fn test_in_plane_has_one_zero_coordinate() {
        let a = 0.6_f64;
        let b = (1.0 - a * a).sqrt();
        let points = expand_orbit(5, a, 0.0, 1.0).unwrap();
        assert_eq!(points[0].position, Vector3::new(a, b, 0.0));
        assert_eq!(points[4].position, Vector3::new(b, a, 0.0));
        assert_eq!(points[8].position, Vector3::new(a, 0.0, b));
        assert_eq!(points[23].position, Vector3::new(0.0, -b, -a));
        for p in &points {
            let zeros = [p.x(), p.y(), p.z()].iter().filter(|c| **c == 0.0).count();
            assert_eq!(zeros, 1);
        }
    }

    #[test]
    fn test_general_class_points_on_sphere() {
        let (a, b) = (0.2_f64, 0.45_f64);
        let c = (1.0 - a * a - b * b).sqrt();
        let points = expand_orbit(6, a, b, -0.01).unwrap();
        assert_eq!(points.len(), 48);
        assert_eq!(points[0].position, Vector3::new(a, b, c));
        assert_eq!(points[8].position, Vector3::new(a, c, b));
        assert_eq!(points[47].position, Vector3::new(-c, -b, -a));
        for p in &points {
            assert!(p.norm_deviation() < 1e-14);
            assert_eq!(p.weight, -0.01);
        }
    }

    // ==================== Typed generators ====================

    #[test]
    fn test_expand_into_appends() {
        let mut out = Vec::new();
        let n1 = GeneratorTriple::axis(0.5).expand_into(&mut out).unwrap();
        let n2 = GeneratorTriple::two_equal(0.5, 0.25).expand_into(&mut out).unwrap();
        assert_eq!(n1, 6);
        assert_eq!(n2, 24);
        assert_eq!(out.len(), 30);
        assert_eq!(out[5].weight, 0.5);
        assert_eq!(out[6].weight, 0.25);
    }

    #[test]
    fn test_typed_and_raw_expansion_agree() {
        let typed = GeneratorTriple::general(0.25, 0.5, 0.1).expand().unwrap();
        let raw = expand_orbit(6, 0.25, 0.5, 0.1).unwrap();
        assert_eq!(typed, raw);
    }

    // ==================== Faults ====================

    #[test]
    fn test_invalid_class_codes() {
        for code in [0u8, 7, 42, u8::MAX] {
            let err = expand_orbit(code, 0.1, 0.1, 1.0).unwrap_err();
            assert_eq!(err, LebedevError::InvalidSymmetryClass { code });
            assert!(err.is_data_integrity_fault());
        }
    }

    #[test]
    fn test_negative_radicand_is_reported() {
        let err = expand_orbit(4, 0.9, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, LebedevError::NegativeRadicand { class: 4, .. }));

        let err = expand_orbit(5, 1.5, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, LebedevError::NegativeRadicand { class: 5, .. }));

        let err = expand_orbit(6, 0.8, 0.8, 1.0).unwrap_err();
        assert!(matches!(err, LebedevError::NegativeRadicand { class: 6, .. }));
        assert!(err.is_data_integrity_fault());
    }

    #[test]
    fn test_failed_expansion_appends_nothing() {
        let mut out = vec![QuadraturePoint::new(1.0, 0.0, 0.0, 1.0)];
        assert!(GeneratorTriple::general(0.9, 0.9, 1.0).expand_into(&mut out).is_err());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_tiny_negative_radicand_is_clamped() {
        // 1 - 2a² rounds to a tiny negative value for a just above 1/√2
        let a = 0.5_f64.sqrt() + 1e-16;
        let points = expand_orbit(4, a, 0.0, 1.0).unwrap();
        assert_eq!(points.len(), 24);
        assert!(points.iter().all(|p| p.position.iter().all(|c| c.is_finite())));
    }
}
