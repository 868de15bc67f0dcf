use crate::error::{LebedevError, Result};
use crate::orbit::GeneratorTriple;
use crate::rules::lebedev_rule::LebedevRule;
use crate::rules::rule_order::RuleOrder;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Build the grid of `order` by expanding its generator table.
pub fn generate_rule(order: RuleOrder) -> Result<LebedevRule> {
    expand_table(order, order.table())
}

/// Build the grid with exactly `points` nodes.
///
/// Fails with [`LebedevError::UnsupportedOrder`] unless `points` is one of the
/// tabulated sizes; no partial grid is produced.
pub fn generate_rule_by_order(points: usize) -> Result<LebedevRule> {
    generate_rule(RuleOrder::try_from(points)?)
}

/// Build the smallest grid that integrates polynomials of `degree` exactly.
pub fn generate_rule_for_precision(degree: u32) -> Result<LebedevRule> {
    generate_rule(RuleOrder::for_precision(degree)?)
}

/// Build every tabulated grid, smallest first.
#[cfg(not(feature = "parallel"))]
pub fn generate_all_rules() -> Result<Vec<LebedevRule>> {
    RuleOrder::ALL.into_iter().map(generate_rule).collect()
}

/// Build every tabulated grid, smallest first.
#[cfg(feature = "parallel")]
pub fn generate_all_rules() -> Result<Vec<LebedevRule>> {
    RuleOrder::ALL.par_iter().map(|&order| generate_rule(order)).collect()
}

/// Fold a generator table into one grid and check the point count against `order`.
pub(crate) fn expand_table(order: RuleOrder, table: &[GeneratorTriple]) -> Result<LebedevRule> {
    let points = table.iter().try_fold(
        Vec::with_capacity(order.points()),
        |mut points, generator| {
            generator.expand_into(&mut points)?;
            Ok::<_, LebedevError>(points)
        },
    )?;

    if points.len() != order.points() {
        return Err(LebedevError::PointCountMismatch {
            order: order.points(),
            produced: points.len(),
        });
    }

    debug!("generated {} from {} generators", order, table.len());
    Ok(LebedevRule::new(order, points))
}
