//! Error types for orbit expansion and rule generation
//!
//! Two kinds of failure exist:
//! - data-integrity faults, which can only be raised by a malformed generator
//!   table (bad class code, negative radicand, wrong point count);
//! - unsupported requests, raised when a caller asks for a grid size or a
//!   precision no tabulated rule provides.
//!
//! # Example
//!
//! ```rust
//! use lebedev_quadrature::{generate_rule_by_order, LebedevError};
//!
//! match generate_rule_by_order(7) {
//!     Err(LebedevError::UnsupportedOrder { requested }) => assert_eq!(requested, 7),
//!     other => panic!("unexpected result: {:?}", other.map(|r| r.len())),
//! }
//! ```

use thiserror::Error;

/// Result type alias for quadrature operations
pub type Result<T> = std::result::Result<T, LebedevError>;

/// Errors raised while expanding orbits or building rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LebedevError {
    /// Symmetry class code outside 1..=6
    #[error("Invalid symmetry class code {code}: expected a value in 1..=6. The generator table is malformed.")]
    InvalidSymmetryClass { code: u8 },

    /// A derived coordinate would need the square root of a negative number
    #[error("Negative radicand {radicand:e} while expanding a class {class} orbit. The generator coordinates do not lie on the unit sphere.")]
    NegativeRadicand { class: u8, radicand: f64 },

    /// Expanding a table produced a different number of points than its order
    #[error("Rule table for {order} points produced {produced} points. The generator table is malformed.")]
    PointCountMismatch { order: usize, produced: usize },

    /// Requested grid size is not one of the tabulated Lebedev orders
    #[error("Unsupported Lebedev order {requested}: supported point counts are 6, 14, 26, 38, 50, 74, 86, 110, 146, 170, 194, 230, 266, 302, 350, 434, 590, 770, 974, 1202, 1454, 1730, 2030, 2354, 2702, 3074, 3470, 3890, 4334, 4802, 5294 and 5810")]
    UnsupportedOrder { requested: usize },

    /// Requested algebraic precision exceeds every tabulated rule
    #[error("Unsupported precision {requested}: the most accurate rule is exact to degree {max}")]
    UnsupportedPrecision { requested: u32, max: u32 },
}

impl LebedevError {
    /// Returns true if the error points at corrupted generator data rather than
    /// at a bad caller request.
    pub fn is_data_integrity_fault(&self) -> bool {
        matches!(
            self,
            LebedevError::InvalidSymmetryClass { .. }
                | LebedevError::NegativeRadicand { .. }
                | LebedevError::PointCountMismatch { .. }
        )
    }

    /// Returns true if the caller can recover by asking for a different rule
    pub fn is_unsupported_request(&self) -> bool {
        matches!(
            self,
            LebedevError::UnsupportedOrder { .. } | LebedevError::UnsupportedPrecision { .. }
        )
    }
}
