use crate::config::MAX_PRECISION;
use crate::error::{LebedevError, Result};
use crate::orbit::GeneratorTriple;
use crate::rules::rule_tables::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tabulated Lebedev grid sizes. Each variant is named after its number of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleOrder {
    N6,
    N14,
    N26,
    N38,
    N50,
    N74,
    N86,
    N110,
    N146,
    N170,
    N194,
    N230,
    N266,
    N302,
    N350,
    N434,
    N590,
    N770,
    N974,
    N1202,
    N1454,
    N1730,
    N2030,
    N2354,
    N2702,
    N3074,
    N3470,
    N3890,
    N4334,
    N4802,
    N5294,
    N5810,
}

impl RuleOrder {
    /// Every supported order, smallest first
    pub const ALL: [RuleOrder; 32] = [
        RuleOrder::N6,
        RuleOrder::N14,
        RuleOrder::N26,
        RuleOrder::N38,
        RuleOrder::N50,
        RuleOrder::N74,
        RuleOrder::N86,
        RuleOrder::N110,
        RuleOrder::N146,
        RuleOrder::N170,
        RuleOrder::N194,
        RuleOrder::N230,
        RuleOrder::N266,
        RuleOrder::N302,
        RuleOrder::N350,
        RuleOrder::N434,
        RuleOrder::N590,
        RuleOrder::N770,
        RuleOrder::N974,
        RuleOrder::N1202,
        RuleOrder::N1454,
        RuleOrder::N1730,
        RuleOrder::N2030,
        RuleOrder::N2354,
        RuleOrder::N2702,
        RuleOrder::N3074,
        RuleOrder::N3470,
        RuleOrder::N3890,
        RuleOrder::N4334,
        RuleOrder::N4802,
        RuleOrder::N5294,
        RuleOrder::N5810,
    ];

    /// Number of grid points
    pub const fn points(self) -> usize {
        match self {
            RuleOrder::N6 => 6,
            RuleOrder::N14 => 14,
            RuleOrder::N26 => 26,
            RuleOrder::N38 => 38,
            RuleOrder::N50 => 50,
            RuleOrder::N74 => 74,
            RuleOrder::N86 => 86,
            RuleOrder::N110 => 110,
            RuleOrder::N146 => 146,
            RuleOrder::N170 => 170,
            RuleOrder::N194 => 194,
            RuleOrder::N230 => 230,
            RuleOrder::N266 => 266,
            RuleOrder::N302 => 302,
            RuleOrder::N350 => 350,
            RuleOrder::N434 => 434,
            RuleOrder::N590 => 590,
            RuleOrder::N770 => 770,
            RuleOrder::N974 => 974,
            RuleOrder::N1202 => 1202,
            RuleOrder::N1454 => 1454,
            RuleOrder::N1730 => 1730,
            RuleOrder::N2030 => 2030,
            RuleOrder::N2354 => 2354,
            RuleOrder::N2702 => 2702,
            RuleOrder::N3074 => 3074,
            RuleOrder::N3470 => 3470,
            RuleOrder::N3890 => 3890,
            RuleOrder::N4334 => 4334,
            RuleOrder::N4802 => 4802,
            RuleOrder::N5294 => 5294,
            RuleOrder::N5810 => 5810,
        }
    }

    /// Highest polynomial degree the rule integrates exactly
    pub const fn precision(self) -> u32 {
        match self {
            RuleOrder::N6 => 3,
            RuleOrder::N14 => 5,
            RuleOrder::N26 => 7,
            RuleOrder::N38 => 9,
            RuleOrder::N50 => 11,
            RuleOrder::N74 => 13,
            RuleOrder::N86 => 15,
            RuleOrder::N110 => 17,
            RuleOrder::N146 => 19,
            RuleOrder::N170 => 21,
            RuleOrder::N194 => 23,
            RuleOrder::N230 => 25,
            RuleOrder::N266 => 27,
            RuleOrder::N302 => 29,
            RuleOrder::N350 => 31,
            RuleOrder::N434 => 35,
            RuleOrder::N590 => 41,
            RuleOrder::N770 => 47,
            RuleOrder::N974 => 53,
            RuleOrder::N1202 => 59,
            RuleOrder::N1454 => 65,
            RuleOrder::N1730 => 71,
            RuleOrder::N2030 => 77,
            RuleOrder::N2354 => 83,
            RuleOrder::N2702 => 89,
            RuleOrder::N3074 => 95,
            RuleOrder::N3470 => 101,
            RuleOrder::N3890 => 107,
            RuleOrder::N4334 => 113,
            RuleOrder::N4802 => 119,
            RuleOrder::N5294 => 125,
            RuleOrder::N5810 => 131,
        }
    }

    /// Generator table of the rule
    pub fn table(self) -> &'static [GeneratorTriple] {
        match self {
            RuleOrder::N6 => RULE_0006,
            RuleOrder::N14 => RULE_0014,
            RuleOrder::N26 => RULE_0026,
            RuleOrder::N38 => RULE_0038,
            RuleOrder::N50 => RULE_0050,
            RuleOrder::N74 => RULE_0074,
            RuleOrder::N86 => RULE_0086,
            RuleOrder::N110 => RULE_0110,
            RuleOrder::N146 => RULE_0146,
            RuleOrder::N170 => RULE_0170,
            RuleOrder::N194 => RULE_0194,
            RuleOrder::N230 => RULE_0230,
            RuleOrder::N266 => RULE_0266,
            RuleOrder::N302 => RULE_0302,
            RuleOrder::N350 => RULE_0350,
            RuleOrder::N434 => RULE_0434,
            RuleOrder::N590 => RULE_0590,
            RuleOrder::N770 => RULE_0770,
            RuleOrder::N974 => RULE_0974,
            RuleOrder::N1202 => RULE_1202,
            RuleOrder::N1454 => RULE_1454,
            RuleOrder::N1730 => RULE_1730,
            RuleOrder::N2030 => RULE_2030,
            RuleOrder::N2354 => RULE_2354,
            RuleOrder::N2702 => RULE_2702,
            RuleOrder::N3074 => RULE_3074,
            RuleOrder::N3470 => RULE_3470,
            RuleOrder::N3890 => RULE_3890,
            RuleOrder::N4334 => RULE_4334,
            RuleOrder::N4802 => RULE_4802,
            RuleOrder::N5294 => RULE_5294,
            RuleOrder::N5810 => RULE_5810,
        }
    }

    pub fn from_points(points: usize) -> Option<Self> {
        match points {
            6 => Some(RuleOrder::N6),
            14 => Some(RuleOrder::N14),
            26 => Some(RuleOrder::N26),
            38 => Some(RuleOrder::N38),
            50 => Some(RuleOrder::N50),
            74 => Some(RuleOrder::N74),
            86 => Some(RuleOrder::N86),
            110 => Some(RuleOrder::N110),
            146 => Some(RuleOrder::N146),
            170 => Some(RuleOrder::N170),
            194 => Some(RuleOrder::N194),
            230 => Some(RuleOrder::N230),
            266 => Some(RuleOrder::N266),
            302 => Some(RuleOrder::N302),
            350 => Some(RuleOrder::N350),
            434 => Some(RuleOrder::N434),
            590 => Some(RuleOrder::N590),
            770 => Some(RuleOrder::N770),
            974 => Some(RuleOrder::N974),
            1202 => Some(RuleOrder::N1202),
            1454 => Some(RuleOrder::N1454),
            1730 => Some(RuleOrder::N1730),
            2030 => Some(RuleOrder::N2030),
            2354 => Some(RuleOrder::N2354),
            2702 => Some(RuleOrder::N2702),
            3074 => Some(RuleOrder::N3074),
            3470 => Some(RuleOrder::N3470),
            3890 => Some(RuleOrder::N3890),
            4334 => Some(RuleOrder::N4334),
            4802 => Some(RuleOrder::N4802),
            5294 => Some(RuleOrder::N5294),
            5810 => Some(RuleOrder::N5810),
            _ => None,
        }
    }

    /// Smallest rule exact to at least `degree`.
    pub fn for_precision(degree: u32) -> Result<Self> {
        RuleOrder::ALL
            .into_iter()
            .find(|order| order.precision() >= degree)
            .ok_or(LebedevError::UnsupportedPrecision {
                requested: degree,
                max: MAX_PRECISION,
            })
    }

    /// Number of generators in the table
    pub fn generator_count(self) -> usize {
        self.table().len()
    }
}

impl TryFrom<usize> for RuleOrder {
    type Error = LebedevError;

    fn try_from(points: usize) -> Result<Self> {
        RuleOrder::from_points(points).ok_or(LebedevError::UnsupportedOrder { requested: points })
    }
}

impl From<RuleOrder> for usize {
    fn from(order: RuleOrder) -> usize {
        order.points()
    }
}

impl fmt::Display for RuleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-point rule", self.points())
    }
}
