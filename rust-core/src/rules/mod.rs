// Rules module: Contains the tabulated Lebedev-Laikov grids and the routines that build them
// This module provides the generator tables, order routing, rule generation and rule validation

// ======================== MODULE DECLARATIONS ========================
pub mod lebedev_rule;
pub mod rule_generation;
pub mod rule_order;
pub mod rule_tables;
pub mod rule_validations;

// Test modules
mod _tests_lebedev_rule;
mod _tests_rule_generation;
mod _tests_rule_order;
mod _tests_rule_validations;

// ======================== RULE ORDERS ========================
pub use rule_order::RuleOrder; // enum - the 32 tabulated grid sizes (N6, N14, ..., N5810)
// RuleOrder impl methods:
//   ALL: [RuleOrder; 32]                                           - every order, smallest first
//   points(self) -> usize                                          - number of grid points
//   precision(self) -> u32                                         - algebraic degree of exactness
//   table(self) -> &'static [GeneratorTriple]                      - generator table of the rule
//   from_points(points: usize) -> Option<Self>                     - exact lookup by point count
//   for_precision(degree: u32) -> Result<Self>                     - smallest order exact to degree
//   generator_count(self) -> usize                                 - number of generators in the table
// RuleOrder also implements TryFrom<usize> (UnsupportedOrder on failure) and Display

// ======================== GENERATED GRIDS ========================
pub use lebedev_rule::{
    LebedevRule,         // struct - owned grid nodes of one order
    WeightNormalization, // enum - Unit (weights sum to 1) or SurfaceArea (weights sum to 4π)
};
// LebedevRule impl methods:
//   order(&self) -> RuleOrder / precision(&self) -> u32            - rule identity
//   normalization(&self) -> WeightNormalization                    - current weight scale
//   len(&self) / is_empty(&self)                                   - number of nodes
//   points(&self) -> &[QuadraturePoint] / iter(&self)              - node access
//   into_points(self) -> Vec<QuadraturePoint>                      - take the nodes
//   xs / ys / zs / weights(&self) -> Vec<f64>                      - parallel coordinate arrays
//   weight_sum(&self) -> f64                                       - total weight
//   with_normalization(self, target: WeightNormalization) -> Self  - rescales weights

// ======================== RULE GENERATION ========================
pub use rule_generation::{
    generate_all_rules,          // fn() -> Result<Vec<LebedevRule>> - every grid (rayon with `parallel`)
    generate_rule,               // fn(order: RuleOrder) -> Result<LebedevRule> - expands one table
    generate_rule_by_order,      // fn(points: usize) -> Result<LebedevRule> - routing by raw point count
    generate_rule_for_precision, // fn(degree: u32) -> Result<LebedevRule> - smallest grid exact to degree
};

// ======================== VALIDATION ========================
pub use rule_validations::{
    MonomialCheck, // struct - computed vs exact sphere average of one monomial
    RuleReport,    // struct - outcome of validate_rule
    validate_rule, // fn(rule: &LebedevRule, tolerance: f64) -> RuleReport - structural checks of a grid
};
// RuleReport impl methods:
//   count_matches / on_unit_sphere / weights_sum_to_one / is_symmetric / is_exact (&self) -> bool
//   is_valid(&self) -> bool                                        - all checks passed
