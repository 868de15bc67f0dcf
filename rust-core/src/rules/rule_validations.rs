use crate::config::{UNIT_SPHERE_TOLERANCE, WEIGHT_SUM_TOLERANCE};
use crate::rules::lebedev_rule::LebedevRule;
use crate::rules::rule_order::RuleOrder;
use crate::symmetries::generate_octahedral_operations;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Even and odd monomials `x^i y^j z^k` checked against their exact sphere averages.
/// Only those with `i + j + k` not above the rule's precision are used.
const CHECKED_MONOMIALS: [(u32, u32, u32); 16] = [
    (0, 0, 0),
    (1, 0, 0),
    (2, 0, 0),
    (1, 1, 0),
    (2, 2, 0),
    (4, 0, 0),
    (3, 1, 0),
    (2, 2, 2),
    (6, 0, 0),
    (4, 2, 0),
    (4, 4, 0),
    (8, 0, 0),
    (6, 4, 2),
    (10, 0, 0),
    (6, 6, 0),
    (4, 4, 4),
];

/// Computed and exact average of one monomial over the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonomialCheck {
    pub exponents: (u32, u32, u32),
    pub computed: f64,
    pub exact: f64,
}

impl MonomialCheck {
    pub fn error(&self) -> f64 {
        (self.computed - self.exact).abs()
    }
}

/// Outcome of [`validate_rule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleReport {
    pub order: RuleOrder,
    pub point_count: usize,
    /// Largest `| |p| - 1 |` over all nodes
    pub max_norm_deviation: f64,
    /// Sum of the weights rescaled to unit normalization
    pub weight_sum: f64,
    pub negative_weights: usize,
    /// Nodes that occur more than once
    pub duplicate_points: usize,
    /// (operation, node) pairs whose image is missing or carries another weight
    pub symmetry_violations: usize,
    pub monomials: Vec<MonomialCheck>,
    pub tolerance: f64,
}

impl RuleReport {
    pub fn count_matches(&self) -> bool {
        self.point_count == self.order.points()
    }

    pub fn on_unit_sphere(&self) -> bool {
        self.max_norm_deviation < UNIT_SPHERE_TOLERANCE
    }

    pub fn weights_sum_to_one(&self) -> bool {
        (self.weight_sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE.max(self.tolerance)
    }

    pub fn is_symmetric(&self) -> bool {
        self.duplicate_points == 0 && self.symmetry_violations == 0
    }

    pub fn is_exact(&self) -> bool {
        self.monomials.iter().all(|m| m.error() < self.tolerance)
    }

    pub fn is_valid(&self) -> bool {
        self.count_matches()
            && self.on_unit_sphere()
            && self.weights_sum_to_one()
            && self.is_symmetric()
            && self.is_exact()
    }
}

/// Check the structural properties of a generated grid: node count, nodes on the
/// unit sphere, total weight, octahedral invariance and exactness on a fixed set
/// of low-degree monomials.
pub fn validate_rule(rule: &LebedevRule, tolerance: f64) -> RuleReport {
    let order = rule.order();
    let unit_scale = 1.0 / rule.normalization().total_weight();

    let max_norm_deviation = rule
        .iter()
        .map(|p| p.norm_deviation())
        .fold(0.0_f64, f64::max);
    let weight_sum = rule.weight_sum() * unit_scale;
    let negative_weights = rule.iter().filter(|p| p.weight < 0.0).count();

    // Signed permutations do not round, so group images match nodes bit for bit.
    let mut nodes: HashMap<[u64; 3], f64> = HashMap::with_capacity(rule.len());
    for p in rule {
        nodes.insert(position_key(p.x(), p.y(), p.z()), p.weight);
    }
    let duplicate_points = rule.len() - nodes.len();

    let mut symmetry_violations = 0;
    for op in generate_octahedral_operations() {
        for p in rule {
            let image = op.apply(p.position);
            match nodes.get(&position_key(image.x, image.y, image.z)) {
                Some(&w) if w == p.weight => {}
                _ => symmetry_violations += 1,
            }
        }
    }

    let monomials = CHECKED_MONOMIALS
        .iter()
        .filter(|(i, j, k)| i + j + k <= order.precision())
        .map(|&(i, j, k)| MonomialCheck {
            exponents: (i, j, k),
            computed: monomial_moment(rule, (i, j, k)) * unit_scale,
            exact: exact_monomial_average((i, j, k)),
        })
        .collect();

    let report = RuleReport {
        order,
        point_count: rule.len(),
        max_norm_deviation,
        weight_sum,
        negative_weights,
        duplicate_points,
        symmetry_violations,
        monomials,
        tolerance,
    };

    if !report.is_valid() {
        warn!(
            "{} failed validation: count={} norm_dev={:e} weight_sum={} duplicates={} symmetry_violations={}",
            order,
            report.point_count,
            report.max_norm_deviation,
            report.weight_sum,
            report.duplicate_points,
            report.symmetry_violations
        );
    }

    report
}

/// Weighted sum of `x^i y^j z^k` over the nodes, in the rule's own normalization.
pub(crate) fn monomial_moment(rule: &LebedevRule, (i, j, k): (u32, u32, u32)) -> f64 {
    rule.iter()
        .map(|p| p.weight * p.x().powi(i as i32) * p.y().powi(j as i32) * p.z().powi(k as i32))
        .sum()
}

/// Average of `x^i y^j z^k` over the unit sphere (integral divided by 4π).
///
/// Zero if any exponent is odd, otherwise `(i-1)!! (j-1)!! (k-1)!! / (i+j+k+1)!!`.
pub(crate) fn exact_monomial_average((i, j, k): (u32, u32, u32)) -> f64 {
    if i % 2 == 1 || j % 2 == 1 || k % 2 == 1 {
        return 0.0;
    }
    double_factorial(i.saturating_sub(1)) * double_factorial(j.saturating_sub(1))
        * double_factorial(k.saturating_sub(1))
        / double_factorial(i + j + k + 1)
}

fn double_factorial(n: u32) -> f64 {
    (1..=n).rev().step_by(2).map(f64::from).product()
}

/// Hash key for a node; `-0.0` and `0.0` map to the same key.
fn position_key(x: f64, y: f64, z: f64) -> [u64; 3] {
    [x, y, z].map(|c| (c + 0.0).to_bits())
}
