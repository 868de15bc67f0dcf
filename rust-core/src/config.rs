// Constants

// Tolerances
pub const UNIT_SPHERE_TOLERANCE: f64 = 1e-10; // |p| - 1 for every generated node
pub const RADICAND_TOLERANCE: f64 = 1e-14; // Radicands in [-tol, 0) are clamped to zero
pub const SYMMETRY_TOLERANCE: f64 = 1e-12; // Distance below which two orbit images coincide
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-12; // Literal weights of a rule sum to one

// Highest algebraic precision covered by the available rules
pub const MAX_PRECISION: u32 = 131;

// Default tolerance for exactness checks of generated rules
pub const DEFAULT_VALIDATION_TOLERANCE: f64 = 1e-12;
