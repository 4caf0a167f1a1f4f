use std::error::Error;
use std::io::Read;

use clap::Parser;
use parity_polytope::constants::{DEFAULT_MEMBERSHIP_TOLERANCE, DEFAULT_ZERO_TOLERANCE};
use parity_polytope::polytope::contains;
use parity_polytope::{project_detailed, ProjectionConfig};

/// Project a vector onto the parity polytope
#[derive(Debug, Parser)]
#[command(name = "parity-project", version, about)]
struct Cli {
    /// Tolerance for treating dual breakpoints as zero
    #[arg(short, long, default_value_t = DEFAULT_ZERO_TOLERANCE)]
    tolerance: f64,

    /// Print the path taken, the parity target and the dual value
    #[arg(short, long)]
    detailed: bool,

    /// Coordinates to project; read whitespace-separated from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

fn read_stdin_values() -> Result<Vec<f64>, Box<dyn Error>> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let values = raw
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(values)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let values = if cli.values.is_empty() {
        read_stdin_values()?
    } else {
        cli.values
    };
    tracing::debug!(n = values.len(), "projecting input vector");

    let config = ProjectionConfig::default().with_zero_tolerance(cli.tolerance);
    let projection = project_detailed(&values, &config)?;

    if cli.detailed {
        println!("path: {:?}", projection.path);
        match projection.parity_target {
            Some(r) => println!("parity target: {}", r),
            None => println!("parity target: -"),
        }
        println!("beta: {}", projection.beta);
        println!(
            "in polytope: {}",
            contains(&projection.values, DEFAULT_MEMBERSHIP_TOLERANCE)
        );
    }
    for value in &projection.values {
        println!("{}", value);
    }

    Ok(())
}
