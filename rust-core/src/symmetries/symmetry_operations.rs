use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// A single point-group operation acting on Cartesian coordinates.
///
/// The matrix is always a signed permutation: one entry of ±1 in every row and
/// every column. Products of such matrices stay in the set, so composition never
/// leaves `i8` range and every operation has order at most 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Matrix3<i8>", into = "Matrix3<i8>")]
pub struct SymmetryOperation {
    rotation: Matrix3<i8>,
}

impl SymmetryOperation {
    /// Create a new symmetry operation, or `None` if `rotation` is not a signed
    /// permutation matrix
    pub fn new(rotation: Matrix3<i8>) -> Option<Self> {
        is_signed_permutation(&rotation).then_some(Self { rotation })
    }

    /// Operation with `(R p)_i = signs[i] * p[perm[i]]`.
    ///
    /// `perm` must be a permutation of `0..3` and every sign ±1.
    pub(crate) fn from_signed_permutation(perm: [usize; 3], signs: [i8; 3]) -> Self {
        let mut rotation = Matrix3::<i8>::zeros();
        for (row, (&col, &sign)) in perm.iter().zip(signs.iter()).enumerate() {
            rotation[(row, col)] = sign;
        }
        debug_assert!(is_signed_permutation(&rotation));
        Self { rotation }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
        }
    }

    pub fn rotation(&self) -> &Matrix3<i8> {
        &self.rotation
    }

    /// Apply symmetry operation to a point
    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        let rotation_f64 = self.rotation.map(f64::from);
        rotation_f64 * point
    }

    /// Operation equivalent to applying `other` first and then `self`
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
        }
    }

    /// Inverse operation. The matrix is orthogonal, so this is its transpose.
    pub fn inverse(&self) -> Self {
        Self {
            rotation: self.rotation.transpose(),
        }
    }

    /// Determinant of the integer matrix (+1 for rotations, -1 for improper operations)
    pub fn determinant(&self) -> i32 {
        let m = self.rotation.map(i32::from);
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }

    /// True for proper rotations
    pub fn is_proper(&self) -> bool {
        self.determinant() == 1
    }

    /// Get the order of this symmetry operation (how many times to apply to get identity)
    pub fn order(&self) -> usize {
        // Signed 3x3 permutations have order 1, 2, 3, 4 or 6
        let mut power = *self;
        for n in 1..=6 {
            if power.is_identity() {
                return n;
            }
            power = power.compose(self);
        }
        unreachable!("signed permutation with order above 6: {:?}", self.rotation)
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        self.rotation == Matrix3::identity()
    }
}

impl TryFrom<Matrix3<i8>> for SymmetryOperation {
    type Error = &'static str;

    fn try_from(rotation: Matrix3<i8>) -> Result<Self, Self::Error> {
        Self::new(rotation).ok_or("rotation is not a signed permutation matrix")
    }
}

impl From<SymmetryOperation> for Matrix3<i8> {
    fn from(op: SymmetryOperation) -> Self {
        op.rotation
    }
}

fn is_signed_permutation(m: &Matrix3<i8>) -> bool {
    let unit_entries = m.iter().all(|&v| (-1..=1).contains(&v));
    let one_per_row = m.row_iter().all(|row| row.iter().filter(|&&v| v != 0).count() == 1);
    let one_per_col = m.column_iter().all(|col| col.iter().filter(|&&v| v != 0).count() == 1);
    unit_entries && one_per_row && one_per_col
}
