#[cfg(test)]
mod _tests_quadrature_point {
    use super::super::quadrature_point::QuadraturePoint;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_accessors() {
        let p = QuadraturePoint::new(0.6, 0.0, 0.8, 0.25);
        assert_eq!(p.x(), 0.6);
        assert_eq!(p.y(), 0.0);
        assert_eq!(p.z(), 0.8);
        assert_eq!(p.weight, 0.25);
        assert!(p.norm_deviation() < 1e-14);
    }

    #[test]
    fn test_spherical_angles_of_axes() {
        let (theta, _) = QuadraturePoint::new(0.0, 0.0, 1.0, 1.0).to_spherical();
        assert_relative_eq!(theta, 0.0);

        let (theta, _) = QuadraturePoint::new(0.0, 0.0, -1.0, 1.0).to_spherical();
        assert_relative_eq!(theta, PI);

        let (theta, phi) = QuadraturePoint::new(0.0, 1.0, 0.0, 1.0).to_spherical();
        assert_relative_eq!(theta, FRAC_PI_2);
        assert_relative_eq!(phi, FRAC_PI_2);

        let (theta, phi) = QuadraturePoint::new(-1.0, 0.0, 0.0, 1.0).to_spherical();
        assert_relative_eq!(theta, FRAC_PI_2);
        assert_relative_eq!(phi, PI);
    }

    #[test]
    fn test_spherical_angles_of_face_diagonal() {
        let s = 0.5_f64.sqrt();
        let (theta, phi) = QuadraturePoint::new(s, s, 0.0, 1.0).to_spherical();
        assert_relative_eq!(theta, FRAC_PI_2, epsilon = 1e-15);
        assert_relative_eq!(phi, FRAC_PI_4, epsilon = 1e-15);
    }

    #[test]
    fn test_scaled_keeps_position_and_sign() {
        let p = QuadraturePoint::new(1.0, 0.0, 0.0, -0.5);
        let q = p.scaled(4.0);
        assert_eq!(q.position, p.position);
        assert_eq!(q.weight, -2.0);
    }
}
