use crate::orbit::QuadraturePoint;
use crate::rules::rule_order::RuleOrder;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Scale applied to the literal table weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightNormalization {
    /// Weights as tabulated; they sum to one
    #[default]
    Unit,
    /// Weights multiplied by 4π; they sum to the area of the unit sphere
    SurfaceArea,
}

impl WeightNormalization {
    /// Total weight of a rule under this normalization
    pub fn total_weight(self) -> f64 {
        match self {
            WeightNormalization::Unit => 1.0,
            WeightNormalization::SurfaceArea => 4.0 * PI,
        }
    }
}

/// A complete Lebedev grid: owned nodes plus the order they were built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LebedevRule {
    order: RuleOrder,
    normalization: WeightNormalization,
    points: Vec<QuadraturePoint>,
}

impl LebedevRule {
    pub(crate) fn new(order: RuleOrder, points: Vec<QuadraturePoint>) -> Self {
        LebedevRule {
            order,
            normalization: WeightNormalization::Unit,
            points,
        }
    }

    pub fn order(&self) -> RuleOrder {
        self.order
    }

    pub fn precision(&self) -> u32 {
        self.order.precision()
    }

    pub fn normalization(&self) -> WeightNormalization {
        self.normalization
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[QuadraturePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuadraturePoint> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<QuadraturePoint> {
        self.points
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(QuadraturePoint::x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(QuadraturePoint::y).collect()
    }

    pub fn zs(&self) -> Vec<f64> {
        self.points.iter().map(QuadraturePoint::z).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.weight).collect()
    }

    pub fn weight_sum(&self) -> f64 {
        self.points.iter().map(|p| p.weight).sum()
    }

    /// Rescale the weights to `target`. Rescaling back to [`WeightNormalization::Unit`]
    /// is exact only up to rounding.
    pub fn with_normalization(mut self, target: WeightNormalization) -> Self {
        if target != self.normalization {
            let factor = target.total_weight() / self.normalization.total_weight();
            for p in &mut self.points {
                *p = p.scaled(factor);
            }
            self.normalization = target;
        }
        self
    }
}

impl<'a> IntoIterator for &'a LebedevRule {
    type Item = &'a QuadraturePoint;
    type IntoIter = std::slice::Iter<'a, QuadraturePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
