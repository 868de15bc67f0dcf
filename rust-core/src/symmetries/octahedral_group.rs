use crate::symmetries::symmetry_operations::SymmetryOperation;
use nalgebra::Vector3;

/// Axis permutations, identity first.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Generate the 48 operations of the full octahedral group Oh.
///
/// Every element is a signed permutation matrix: row `i` holds a single ±1 in
/// column `perm[i]`, so `(R p)_i = ±p[perm[i]]`. The identity comes first.
pub fn generate_octahedral_operations() -> Vec<SymmetryOperation> {
    let mut ops = Vec::with_capacity(48);

    for perm in PERMUTATIONS {
        for sign_bits in 0..8u8 {
            let signs = [0, 1, 2].map(|row| if sign_bits & (1 << row) == 0 { 1 } else { -1 });
            ops.push(SymmetryOperation::from_signed_permutation(perm, signs));
        }
    }

    ops
}

/// Generate the 24 proper rotations of the octahedral group O.
pub fn generate_octahedral_rotations() -> Vec<SymmetryOperation> {
    generate_octahedral_operations()
        .into_iter()
        .filter(SymmetryOperation::is_proper)
        .collect()
}

/// Distinct images of `point` under `ops`, in order of first appearance.
///
/// Two images closer than `tol` count as the same point.
pub fn orbit_of(point: Vector3<f64>, ops: &[SymmetryOperation], tol: f64) -> Vec<Vector3<f64>> {
    let mut orbit: Vec<Vector3<f64>> = Vec::new();

    for op in ops {
        let image = op.apply(point);
        if !orbit.iter().any(|p| (p - image).norm() < tol) {
            orbit.push(image);
        }
    }

    orbit
}
