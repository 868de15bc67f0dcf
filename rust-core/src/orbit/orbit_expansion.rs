use crate::config::RADICAND_TOLERANCE;
use crate::error::{LebedevError, Result};
use crate::orbit::quadrature_point::QuadraturePoint;
use crate::orbit::symmetry_class::SymmetryClass;
use log::trace;
use serde::{Deserialize, Serialize};

/// Magnitudes placed on the x, y and z axes for one arrangement of an orbit.
/// `None` marks a coordinate that is zero for every point of the arrangement
/// and therefore never takes a sign.
type Arrangement = [Option<f64>; 3];

/// One generator of a Lebedev rule: a symmetry class, up to two free
/// coordinates and the weight shared by every point of its orbit.
///
/// Classes 1-3 ignore `a` and `b`; classes 4 and 5 ignore `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorTriple {
    pub class: SymmetryClass,
    pub a: f64,
    pub b: f64,
    pub weight: f64,
}

impl GeneratorTriple {
    pub const fn new(class: SymmetryClass, a: f64, b: f64, weight: f64) -> Self {
        Self { class, a, b, weight }
    }

    pub const fn axis(weight: f64) -> Self {
        Self::new(SymmetryClass::Axis, 0.0, 0.0, weight)
    }

    pub const fn face_diagonal(weight: f64) -> Self {
        Self::new(SymmetryClass::FaceDiagonal, 0.0, 0.0, weight)
    }

    pub const fn body_diagonal(weight: f64) -> Self {
        Self::new(SymmetryClass::BodyDiagonal, 0.0, 0.0, weight)
    }

    pub const fn two_equal(a: f64, weight: f64) -> Self {
        Self::new(SymmetryClass::TwoEqual, a, 0.0, weight)
    }

    pub const fn in_plane(a: f64, weight: f64) -> Self {
        Self::new(SymmetryClass::InPlane, a, 0.0, weight)
    }

    pub const fn general(a: f64, b: f64, weight: f64) -> Self {
        Self::new(SymmetryClass::General, a, b, weight)
    }

    pub const fn orbit_size(&self) -> usize {
        self.class.orbit_size()
    }

    /// Expand this generator into its full octahedral orbit.
    pub fn expand(&self) -> Result<Vec<QuadraturePoint>> {
        let mut points = Vec::with_capacity(self.orbit_size());
        self.expand_into(&mut points)?;
        Ok(points)
    }

    /// Append the orbit of this generator to `out` and return how many points
    /// were written. Nothing is appended on error.
    ///
    /// For each arrangement of the magnitudes, every sign combination of the
    /// nonzero coordinates is emitted, the first nonzero coordinate flipping
    /// fastest. This reproduces the point order of the reference grids.
    pub fn expand_into(&self, out: &mut Vec<QuadraturePoint>) -> Result<usize> {
        let start = out.len();
        let v = self.weight;

        match self.class {
            SymmetryClass::Axis => {
                let a = 1.0;
                for arrangement in [
                    [Some(a), None, None],
                    [None, Some(a), None],
                    [None, None, Some(a)],
                ] {
                    push_sign_combinations(arrangement, v, out);
                }
            }
            SymmetryClass::FaceDiagonal => {
                let a = 0.5_f64.sqrt();
                for arrangement in [
                    [None, Some(a), Some(a)],
                    [Some(a), None, Some(a)],
                    [Some(a), Some(a), None],
                ] {
                    push_sign_combinations(arrangement, v, out);
                }
            }
            SymmetryClass::BodyDiagonal => {
                let a = (1.0_f64 / 3.0).sqrt();
                push_sign_combinations([Some(a), Some(a), Some(a)], v, out);
            }
            SymmetryClass::TwoEqual => {
                let a = self.a;
                let b = derived_coordinate(self.class, 1.0 - 2.0 * a * a)?;
                for arrangement in [
                    [Some(a), Some(a), Some(b)],
                    [Some(a), Some(b), Some(a)],
                    [Some(b), Some(a), Some(a)],
                ] {
                    push_sign_combinations(arrangement, v, out);
                }
            }
            SymmetryClass::InPlane => {
                let a = self.a;
                let b = derived_coordinate(self.class, 1.0 - a * a)?;
                for arrangement in [
                    [Some(a), Some(b), None],
                    [Some(b), Some(a), None],
                    [Some(a), None, Some(b)],
                    [Some(b), None, Some(a)],
                    [None, Some(a), Some(b)],
                    [None, Some(b), Some(a)],
                ] {
                    push_sign_combinations(arrangement, v, out);
                }
            }
            SymmetryClass::General => {
                let (a, b) = (self.a, self.b);
                let c = derived_coordinate(self.class, 1.0 - a * a - b * b)?;
                for arrangement in [
                    [Some(a), Some(b), Some(c)],
                    [Some(a), Some(c), Some(b)],
                    [Some(b), Some(a), Some(c)],
                    [Some(b), Some(c), Some(a)],
                    [Some(c), Some(a), Some(b)],
                    [Some(c), Some(b), Some(a)],
                ] {
                    push_sign_combinations(arrangement, v, out);
                }
            }
        }

        let written = out.len() - start;
        debug_assert_eq!(written, self.class.orbit_size());
        trace!("expanded {} orbit: {} points, weight {:e}", self.class, written, v);
        Ok(written)
    }
}

/// Expand a generator given by its raw class code.
///
/// Fails with [`LebedevError::InvalidSymmetryClass`] for a code outside 1..=6
/// and with [`LebedevError::NegativeRadicand`] when `a`/`b` leave the sphere.
pub fn expand_orbit(symmetry_class: u8, a: f64, b: f64, weight: f64) -> Result<Vec<QuadraturePoint>> {
    let class = SymmetryClass::from_code(symmetry_class)?;
    GeneratorTriple::new(class, a, b, weight).expand()
}

/// Square root of a radicand that must be non-negative up to rounding.
fn derived_coordinate(class: SymmetryClass, radicand: f64) -> Result<f64> {
    if radicand < -RADICAND_TOLERANCE || radicand.is_nan() {
        return Err(LebedevError::NegativeRadicand {
            class: class.code(),
            radicand,
        });
    }
    Ok(radicand.max(0.0).sqrt())
}

fn push_sign_combinations(arrangement: Arrangement, weight: f64, out: &mut Vec<QuadraturePoint>) {
    let mut free_axes = [0usize; 3];
    let mut n_free = 0;
    for (axis, slot) in arrangement.iter().enumerate() {
        if slot.is_some() {
            free_axes[n_free] = axis;
            n_free += 1;
        }
    }

    let magnitudes = arrangement.map(|slot| slot.unwrap_or(0.0));
    for mask in 0..(1u32 << n_free) {
        let mut coords = magnitudes;
        for (bit, &axis) in free_axes[..n_free].iter().enumerate() {
            if mask & (1 << bit) != 0 {
                coords[axis] = -coords[axis];
            }
        }
        out.push(QuadraturePoint::new(coords[0], coords[1], coords[2], weight));
    }
}
