// Orbit module: Expands one Lebedev generator into its octahedral orbit
// This module provides the generator types and the single expansion algorithm shared by every rule

// ======================== MODULE DECLARATIONS ========================
pub mod orbit_expansion;
pub mod quadrature_point;
pub mod symmetry_class;

// Test modules
mod _tests_orbit_expansion;
mod _tests_quadrature_point;

// ======================== GRID NODES ========================
pub use quadrature_point::QuadraturePoint; // struct - point on the unit sphere with its quadrature weight
// QuadraturePoint impl methods:
//   new(x: f64, y: f64, z: f64, weight: f64) -> Self               - creates node from coordinates
//   from_position(position: Vector3<f64>, weight: f64) -> Self     - creates node from vector
//   x(&self) / y(&self) / z(&self) -> f64                          - coordinate accessors
//   norm_deviation(&self) -> f64                                   - | |p| - 1 |
//   to_spherical(&self) -> (f64, f64)                              - polar and azimuthal angle in radians
//   scaled(&self, factor: f64) -> Self                             - same node, weight multiplied by factor

// ======================== SYMMETRY CLASSES ========================
pub use symmetry_class::SymmetryClass; // enum - six octahedral orbit types (Axis, FaceDiagonal, BodyDiagonal, TwoEqual, InPlane, General)
// SymmetryClass impl methods:
//   from_code(code: u8) -> Result<Self>                            - table code 1..=6 to class
//   code(self) -> u8                                               - class to table code
//   orbit_size(self) -> usize                                      - 6, 12, 8, 24, 24 or 48
//   as_str(self) -> &'static str                                   - pattern name such as "(a,a,b)"

// ======================== ORBIT EXPANSION ========================
pub use orbit_expansion::{
    GeneratorTriple, // struct - (class, a, b, weight) generator of one orbit
    expand_orbit,    // fn(symmetry_class: u8, a: f64, b: f64, weight: f64) -> Result<Vec<QuadraturePoint>> - expands a raw generator
};
// GeneratorTriple impl methods:
//   new(class, a, b, weight) -> Self                               - const constructor
//   axis / face_diagonal / body_diagonal(weight) -> Self           - const constructors for classes 1-3
//   two_equal / in_plane(a, weight) -> Self                        - const constructors for classes 4-5
//   general(a, b, weight) -> Self                                  - const constructor for class 6
//   orbit_size(&self) -> usize                                     - points produced by expansion
//   expand(&self) -> Result<Vec<QuadraturePoint>>                  - full orbit as an owned vector
//   expand_into(&self, out: &mut Vec<QuadraturePoint>) -> Result<usize> - appends orbit, returns count
