// Symmetries module: Contains the octahedral point group used by Lebedev grids
// This module provides signed permutation operations and orbit enumeration

// ======================== MODULE DECLARATIONS ========================
pub mod octahedral_group;
pub mod symmetry_operations;

// Test modules
mod _tests_octahedral_group;
mod _tests_symmetry_operations;

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::SymmetryOperation; // struct - point-group operation (signed integer matrix)
// SymmetryOperation impl methods:
//   new(rotation: Matrix3<i8>) -> Option<Self>                     - None unless rotation is a signed permutation
//   rotation(&self) -> &Matrix3<i8>                                - underlying integer matrix
//   identity() -> Self                                             - creates identity operation
//   apply(&self, point: Vector3<f64>) -> Vector3<f64>              - applies operation to point
//   compose(&self, other: &Self) -> Self                           - composes two operations (other first)
//   inverse(&self) -> Self                                         - returns inverse operation
//   determinant(&self) -> i32                                      - +1 proper, -1 improper
//   is_proper(&self) -> bool                                       - true for rotations
//   order(&self) -> usize                                          - smallest n with op^n = identity
//   is_identity(&self) -> bool                                     - checks for identity
// SymmetryOperation also implements TryFrom<Matrix3<i8>>; serde goes through the same check

// ======================== OCTAHEDRAL GROUP ========================
pub use octahedral_group::{
    generate_octahedral_operations, // fn() -> Vec<SymmetryOperation> - all 48 operations of Oh (identity first)
    generate_octahedral_rotations,  // fn() -> Vec<SymmetryOperation> - the 24 proper rotations (group O)
    orbit_of, // fn(point: Vector3<f64>, ops: &[SymmetryOperation], tol: f64) -> Vec<Vector3<f64>> - distinct images
};
