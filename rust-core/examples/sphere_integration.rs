/// Example integrating smooth functions over the unit sphere with Lebedev grids
///
/// The library only produces nodes and weights; the weighted sum below is the
/// caller's part of the work.
use lebedev_quadrature::{generate_rule, RuleOrder, WeightNormalization};
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Integrating exp(x) over the unit sphere ===\n");

    // ∫ exp(x) dΩ = 4π sinh(1)
    let exact = 4.0 * PI * 1.0_f64.sinh();
    println!("Exact value: {:.16}\n", exact);

    for order in [
        RuleOrder::N6,
        RuleOrder::N14,
        RuleOrder::N26,
        RuleOrder::N50,
        RuleOrder::N110,
        RuleOrder::N302,
    ] {
        let rule = generate_rule(order)?.with_normalization(WeightNormalization::SurfaceArea);
        let approx: f64 = rule.iter().map(|p| p.weight * p.x().exp()).sum();
        println!(
            "{:>4} points (degree {:>2}): {:.16}  error {:.2e}",
            rule.len(),
            rule.precision(),
            approx,
            (approx - exact).abs()
        );
    }

    println!("\n=== Spherical harmonic orthogonality ===\n");

    // Y_2^0 ∝ 3z² - 1 is orthogonal to the constant; its squared norm is 16π/5
    let rule = generate_rule(RuleOrder::N26)?.with_normalization(WeightNormalization::SurfaceArea);
    let y20 = |z: f64| 3.0 * z * z - 1.0;
    let mean: f64 = rule.iter().map(|p| p.weight * y20(p.z())).sum();
    let norm: f64 = rule.iter().map(|p| p.weight * y20(p.z()).powi(2)).sum();
    println!("<1, 3z²-1>      = {:+.3e} (exact 0)", mean);
    println!("<3z²-1, 3z²-1>  = {:.16} (exact {:.16})", norm, 16.0 * PI / 5.0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_integral_converges() {
        let exact = 4.0 * PI * 1.0_f64.sinh();
        let rule = generate_rule(RuleOrder::N110)
            .unwrap()
            .with_normalization(WeightNormalization::SurfaceArea);
        let approx: f64 = rule.iter().map(|p| p.weight * p.x().exp()).sum();
        assert!((approx - exact).abs() < 1e-12);
    }
}
