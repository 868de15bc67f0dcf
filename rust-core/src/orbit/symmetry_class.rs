use crate::error::{LebedevError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six octahedral orbit types a Lebedev generator can belong to.
///
/// Numeric codes follow the published Lebedev-Laikov tables (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymmetryClass {
    /// `(±1, 0, 0)` and axis permutations
    Axis,
    /// `(0, ±a, ±a)` with `a = 1/√2`
    FaceDiagonal,
    /// `(±a, ±a, ±a)` with `a = 1/√3`
    BodyDiagonal,
    /// `(a, a, b)` with `b = √(1 - 2a²)`
    TwoEqual,
    /// `(a, b, 0)` with `b = √(1 - a²)`
    InPlane,
    /// `(a, b, c)` with `c = √(1 - a² - b²)`
    General,
}

impl SymmetryClass {
    pub const ALL: [SymmetryClass; 6] = [
        SymmetryClass::Axis,
        SymmetryClass::FaceDiagonal,
        SymmetryClass::BodyDiagonal,
        SymmetryClass::TwoEqual,
        SymmetryClass::InPlane,
        SymmetryClass::General,
    ];

    /// Look up a class by its table code.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(SymmetryClass::Axis),
            2 => Ok(SymmetryClass::FaceDiagonal),
            3 => Ok(SymmetryClass::BodyDiagonal),
            4 => Ok(SymmetryClass::TwoEqual),
            5 => Ok(SymmetryClass::InPlane),
            6 => Ok(SymmetryClass::General),
            _ => Err(LebedevError::InvalidSymmetryClass { code }),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            SymmetryClass::Axis => 1,
            SymmetryClass::FaceDiagonal => 2,
            SymmetryClass::BodyDiagonal => 3,
            SymmetryClass::TwoEqual => 4,
            SymmetryClass::InPlane => 5,
            SymmetryClass::General => 6,
        }
    }

    /// Number of points one generator of this class expands into.
    pub const fn orbit_size(self) -> usize {
        match self {
            SymmetryClass::Axis => 6,
            SymmetryClass::FaceDiagonal => 12,
            SymmetryClass::BodyDiagonal => 8,
            SymmetryClass::TwoEqual => 24,
            SymmetryClass::InPlane => 24,
            SymmetryClass::General => 48,
        }
    }

    /// Short pattern name
    pub fn as_str(self) -> &'static str {
        match self {
            SymmetryClass::Axis => "(1,0,0)",
            SymmetryClass::FaceDiagonal => "(0,a,a)",
            SymmetryClass::BodyDiagonal => "(a,a,a)",
            SymmetryClass::TwoEqual => "(a,a,b)",
            SymmetryClass::InPlane => "(a,b,0)",
            SymmetryClass::General => "(a,b,c)",
        }
    }
}

impl TryFrom<u8> for SymmetryClass {
    type Error = LebedevError;

    fn try_from(code: u8) -> Result<Self> {
        SymmetryClass::from_code(code)
    }
}

impl fmt::Display for SymmetryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {} {}", self.code(), self.as_str())
    }
}
