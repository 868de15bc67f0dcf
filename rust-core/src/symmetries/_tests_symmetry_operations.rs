#[cfg(test)]
mod _tests_symmetry_operations {
    use super::super::symmetry_operations::SymmetryOperation;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};

    fn four_fold_z() -> SymmetryOperation {
        SymmetryOperation::new(Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1)).unwrap()
    }

    fn inversion() -> SymmetryOperation {
        SymmetryOperation::new(Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, -1)).unwrap()
    }

    #[test]
    fn test_identity_leaves_points_unchanged() {
        let op = SymmetryOperation::identity();
        let p = Vector3::new(0.3, -0.4, 0.5);
        assert!(op.is_identity());
        assert_eq!(op.apply(p), p);
        assert_eq!(op.order(), 1);
    }

    #[test]
    fn test_four_fold_rotation() {
        let op = four_fold_z();
        let rotated = op.apply(Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(rotated, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(op.order(), 4);
        assert_eq!(op.determinant(), 1);
        assert!(op.is_proper());
    }

    #[test]
    fn test_inversion_is_improper() {
        let op = inversion();
        assert_eq!(op.determinant(), -1);
        assert!(!op.is_proper());
        assert_eq!(op.order(), 2);
        assert_relative_eq!(
            op.apply(Vector3::new(0.1, 0.2, 0.3)),
            Vector3::new(-0.1, -0.2, -0.3)
        );
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        let op = four_fold_z();
        assert!(op.compose(&op.inverse()).is_identity());
        assert!(op.inverse().compose(&op).is_identity());
    }

    #[test]
    fn test_compose_applies_right_operand_first() {
        let rot = four_fold_z();
        let mirror_x = SymmetryOperation::new(Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, 1)).unwrap();
        let p = Vector3::new(1.0, 0.0, 0.0);

        let composed = rot.compose(&mirror_x);
        assert_relative_eq!(composed.apply(p), rot.apply(mirror_x.apply(p)));
        assert_relative_eq!(composed.apply(p), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_three_fold_and_six_fold_orders() {
        // Cyclic permutation of the axes
        let c3 = SymmetryOperation::new(Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0)).unwrap();
        assert_eq!(c3.order(), 3);

        // Rotoinversion S6 = inversion * C3
        let s6 = inversion().compose(&c3);
        assert_eq!(s6.order(), 6);
        assert!(!s6.is_proper());
    }

    #[test]
    fn test_new_rejects_non_permutation_matrices() {
        let rejected = [
            Matrix3::new(2, 0, 0, 0, 1, 0, 0, 0, 1),     // scaled axis
            Matrix3::new(1, 1, 0, 0, 1, 0, 0, 0, 1),     // shear
            Matrix3::new(1, 0, 0, 1, 0, 0, 0, 0, 1),     // repeated column
            Matrix3::new(0, 0, 0, 0, 1, 0, 0, 0, 1),     // singular
            Matrix3::new(100, 0, 0, 0, 100, 0, 0, 0, 1), // would overflow i8 on composition
        ];
        for m in rejected {
            assert!(SymmetryOperation::new(m).is_none(), "{:?}", m);
            assert!(SymmetryOperation::try_from(m).is_err());
        }
    }

    #[test]
    fn test_serde_rejects_invalid_matrix() {
        let op = four_fold_z();
        let json = serde_json::to_string(&op).unwrap();
        let decoded: SymmetryOperation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, op);
        assert_eq!(Matrix3::<i8>::from(decoded), *op.rotation());

        let bad = serde_json::to_string(&Matrix3::<i8>::new(2, 0, 0, 0, 1, 0, 0, 0, 1)).unwrap();
        assert!(serde_json::from_str::<SymmetryOperation>(&bad).is_err());
    }
}
