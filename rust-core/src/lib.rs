//! Lebedev-Laikov angular quadrature library
//!
//! This library generates the nodes and weights of the Lebedev grids on the unit
//! sphere: 32 fixed rules with octahedral symmetry, from 6 points (exact to degree 3)
//! up to 5810 points (exact to degree 131).
//!
//! Every rule is a table of generators, each expanded into its octahedral orbit by
//! [`orbit::GeneratorTriple::expand`]. Rules are requested by point count or by
//! required precision and come back as owned [`rules::LebedevRule`] values.
//!
//! ```rust
//! use lebedev_quadrature::{generate_rule_by_order, WeightNormalization};
//!
//! let rule = generate_rule_by_order(110)?
//!     .with_normalization(WeightNormalization::SurfaceArea);
//! let area: f64 = rule.iter().map(|p| p.weight).sum();
//! assert!((area - 4.0 * std::f64::consts::PI).abs() < 1e-10);
//! # Ok::<(), lebedev_quadrature::LebedevError>(())
//! ```

pub mod config;
pub mod error;
pub mod orbit;
pub mod rules;
pub mod symmetries;

pub use error::{LebedevError, Result};
pub use orbit::{expand_orbit, GeneratorTriple, QuadraturePoint, SymmetryClass};
pub use rules::{
    generate_all_rules, generate_rule, generate_rule_by_order, generate_rule_for_precision,
    validate_rule, LebedevRule, RuleOrder, RuleReport, WeightNormalization,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
