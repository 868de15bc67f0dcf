use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use lebedev_quadrature::config::DEFAULT_VALIDATION_TOLERANCE;
use lebedev_quadrature::{
    generate_all_rules, generate_rule, generate_rule_by_order, generate_rule_for_precision,
    validate_rule, LebedevRule, RuleOrder, WeightNormalization,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lebedev")]
#[command(about = "Generate and check Lebedev-Laikov angular quadrature grids")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available rules
    List,
    /// Print the nodes and weights of one rule
    Generate {
        /// Number of grid points
        #[arg(short, long, conflicts_with = "precision", required_unless_present = "precision")]
        order: Option<usize>,

        /// Use the smallest rule exact to this polynomial degree
        #[arg(short, long)]
        precision: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Weight scale
        #[arg(short, long, value_enum, default_value_t = Normalization::Unit)]
        normalization: Normalization,

        /// Print polar and azimuthal angles in degrees instead of x, y, z
        #[arg(short, long)]
        spherical: bool,

        /// Output file path (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check point count, norms, weight sum, symmetry and exactness
    Validate {
        /// Validate a single rule instead of all of them
        #[arg(short, long)]
        order: Option<usize>,

        /// Tolerance of the exactness checks
        #[arg(long, default_value_t = DEFAULT_VALIDATION_TOLERANCE)]
        tolerance: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Normalization {
    /// Weights sum to one
    Unit,
    /// Weights sum to 4π
    SurfaceArea,
}

impl From<Normalization> for WeightNormalization {
    fn from(n: Normalization) -> Self {
        match n {
            Normalization::Unit => WeightNormalization::Unit,
            Normalization::SurfaceArea => WeightNormalization::SurfaceArea,
        }
    }
}

#[derive(Serialize)]
struct SphericalNode {
    theta: f64,
    phi: f64,
    weight: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    debug!("Starting lebedev v{}", lebedev_quadrature::VERSION);

    match cli.command {
        Commands::List => list_rules(),
        Commands::Generate {
            order,
            precision,
            format,
            normalization,
            spherical,
            output,
        } => {
            let rule = match (order, precision) {
                (Some(points), _) => generate_rule_by_order(points)?,
                (None, Some(degree)) => generate_rule_for_precision(degree)?,
                (None, None) => bail!("either --order or --precision is required"),
            };
            let rule = rule.with_normalization(normalization.into());
            info!("Writing {} (precision {})", rule.order(), rule.precision());

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    write_rule(&rule, format, spherical, &mut writer)?;
                    writer.flush()?;
                    info!("Wrote {} points to {}", rule.len(), path.display());
                    Ok(())
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = BufWriter::new(stdout.lock());
                    write_rule(&rule, format, spherical, &mut writer)?;
                    writer.flush()?;
                    Ok(())
                }
            }
        }
        Commands::Validate { order, tolerance } => validate_rules(order, tolerance),
    }
}

fn list_rules() -> Result<()> {
    println!("{:>6} {:>9} {:>10}", "points", "precision", "generators");
    for order in RuleOrder::ALL {
        println!(
            "{:>6} {:>9} {:>10}",
            order.points(),
            order.precision(),
            order.generator_count()
        );
    }
    Ok(())
}

fn write_rule(
    rule: &LebedevRule,
    format: OutputFormat,
    spherical: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match (format, spherical) {
        (OutputFormat::Text, false) => {
            for p in rule {
                writeln!(out, "{:+.16e} {:+.16e} {:+.16e} {:+.16e}", p.x(), p.y(), p.z(), p.weight)?;
            }
        }
        (OutputFormat::Text, true) => {
            for node in spherical_nodes(rule) {
                writeln!(out, "{:+.16e} {:+.16e} {:+.16e}", node.theta, node.phi, node.weight)?;
            }
        }
        (OutputFormat::Csv, false) => {
            writeln!(out, "x,y,z,w")?;
            for p in rule {
                writeln!(out, "{:.16e},{:.16e},{:.16e},{:.16e}", p.x(), p.y(), p.z(), p.weight)?;
            }
        }
        (OutputFormat::Csv, true) => {
            writeln!(out, "theta,phi,w")?;
            for node in spherical_nodes(rule) {
                writeln!(out, "{:.16e},{:.16e},{:.16e}", node.theta, node.phi, node.weight)?;
            }
        }
        (OutputFormat::Json, false) => {
            serde_json::to_writer_pretty(&mut *out, rule)?;
            writeln!(out)?;
        }
        (OutputFormat::Json, true) => {
            serde_json::to_writer_pretty(&mut *out, &spherical_nodes(rule))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Nodes as (θ, φ) in degrees
fn spherical_nodes(rule: &LebedevRule) -> Vec<SphericalNode> {
    rule.iter()
        .map(|p| {
            let (theta, phi) = p.to_spherical();
            SphericalNode {
                theta: theta.to_degrees(),
                phi: phi.to_degrees(),
                weight: p.weight,
            }
        })
        .collect()
}

fn validate_rules(order: Option<usize>, tolerance: f64) -> Result<()> {
    let rules = match order {
        Some(points) => vec![generate_rule(RuleOrder::try_from(points)?)?],
        None => generate_all_rules()?,
    };

    let mut failures = 0;
    for rule in &rules {
        let report = validate_rule(rule, tolerance);
        let worst_monomial = report
            .monomials
            .iter()
            .map(|m| m.error())
            .fold(0.0_f64, f64::max);
        println!(
            "{:>5} points  precision {:>3}  norm dev {:.1e}  weight sum {:.16}  monomial err {:.1e}  negative {:>3}  {}",
            report.point_count,
            rule.precision(),
            report.max_norm_deviation,
            report.weight_sum,
            worst_monomial,
            report.negative_weights,
            if report.is_valid() { "ok" } else { "FAILED" }
        );
        if !report.is_valid() {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} rules failed validation", failures, rules.len());
    }
    info!("All {} rules passed validation", rules.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clap::CommandFactory;

    fn six_point_output(format: OutputFormat, spherical: bool) -> String {
        let rule = generate_rule_by_order(6).unwrap();
        let mut buf = Vec::new();
        write_rule(&rule, format, spherical, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn parse_fields(line: &str, sep: char) -> Vec<f64> {
        line.split(sep)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_requires_exactly_one_selector() {
        assert!(Cli::try_parse_from(["lebedev", "generate", "--order", "6"]).is_ok());
        assert!(Cli::try_parse_from(["lebedev", "generate", "-p", "9"]).is_ok());
        assert!(Cli::try_parse_from(["lebedev", "generate"]).is_err());
        assert!(Cli::try_parse_from(["lebedev", "generate", "-o", "6", "-p", "3"]).is_err());
    }

    #[test]
    fn test_text_output_uses_signed_scientific_notation() {
        let text = six_point_output(OutputFormat::Text, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("+1.0000000000000000e0 +0.0000000000000000e0 +0.0000000000000000e0 +"));
        assert!(lines[1].starts_with("-1.0000000000000000e0 +0.0000000000000000e0 "));

        // 17 significant digits read back to the same doubles
        let rule = generate_rule_by_order(6).unwrap();
        for (line, p) in lines.iter().zip(&rule) {
            assert_eq!(parse_fields(line, ' '), vec![p.x(), p.y(), p.z(), p.weight]);
        }
    }

    #[test]
    fn test_text_output_in_spherical_coordinates() {
        let text = six_point_output(OutputFormat::Text, true);
        let first = parse_fields(text.lines().next().unwrap(), ' ');
        assert_eq!(first.len(), 3);
        assert_relative_eq!(first[0], 90.0, epsilon = 1e-12);
        assert_relative_eq!(first[1], 0.0, epsilon = 1e-12);

        // (0, 0, 1) sits on the pole
        let pole = parse_fields(text.lines().nth(4).unwrap(), ' ');
        assert_relative_eq!(pole[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_csv_output_has_header_and_one_row_per_node() {
        let csv = six_point_output(OutputFormat::Csv, false);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("x,y,z,w"));
        let rows: Vec<Vec<f64>> = lines.map(|l| parse_fields(l, ',')).collect();
        assert_eq!(rows.len(), 6);
        for row in &rows {
            assert_eq!(row.len(), 4);
            assert_eq!(row[3], 0.1666666666666667);
        }

        let spherical = six_point_output(OutputFormat::Csv, true);
        assert_eq!(spherical.lines().next(), Some("theta,phi,w"));
    }

    #[test]
    fn test_json_output_serializes_the_rule() {
        let json = six_point_output(OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["order"], "N6");
        assert_eq!(value["normalization"], "Unit");

        let points = value["points"].as_array().unwrap();
        assert_eq!(points.len(), 6);
        let second: Vec<f64> = points[1]["position"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c.as_f64().unwrap())
            .collect();
        assert_eq!(second, vec![-1.0, 0.0, 0.0]);
        assert_relative_eq!(points[1]["weight"].as_f64().unwrap(), 0.1666666666666667);

        let spherical = six_point_output(OutputFormat::Json, true);
        let nodes: serde_json::Value = serde_json::from_str(&spherical).unwrap();
        assert_eq!(nodes.as_array().unwrap().len(), 6);
        assert!(nodes[0]["theta"].is_number());
    }
}
