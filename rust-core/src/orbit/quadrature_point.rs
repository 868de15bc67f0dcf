use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One node of an angular grid: a point on the unit sphere and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraturePoint {
    pub position: Vector3<f64>,
    /// May be negative for some rules
    pub weight: f64,
}

impl QuadraturePoint {
    pub fn new(x: f64, y: f64, z: f64, weight: f64) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            weight,
        }
    }

    pub fn from_position(position: Vector3<f64>, weight: f64) -> Self {
        Self { position, weight }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Distance of `|p|` from one
    pub fn norm_deviation(&self) -> f64 {
        (self.position.norm() - 1.0).abs()
    }

    /// Polar angle θ ∈ [0, π] measured from +z and azimuth φ = atan2(y, x), in radians.
    pub fn to_spherical(&self) -> (f64, f64) {
        let r = self.position.norm();
        let theta = (self.position.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.position.y.atan2(self.position.x);
        (theta, phi)
    }

    /// Same node with the weight multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            position: self.position,
            weight: self.weight * factor,
        }
    }
}
