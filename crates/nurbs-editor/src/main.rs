//! nurbs-sketch CLI
//!
//! Samples the clamped uniform NURBS curve of a control polygon.
//!
//! # Usage
//!
//! ```bash
//! # Cubic curve, 100 samples, written to stdout
//! nurbs-sketch points.json
//!
//! # Options from a TOML file, overridden on the command line
//! nurbs-sketch points.json --config curve.toml --samples 400 -o curve.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nurbs_core::{CurveOptions, EndpointPolicy};
use nurbs_editor::io::parse_points;
use nurbs_editor::CurveReport;
use nurbs_geometry::{evaluate_strict, evaluate_with};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Endpoint {
    /// Drop the sample at the end of the domain
    Trim,
    /// Close the last knot span and keep the end sample
    Close,
}

impl From<Endpoint> for EndpointPolicy {
    fn from(e: Endpoint) -> Self {
        match e {
            Endpoint::Trim => EndpointPolicy::Trim,
            Endpoint::Close => EndpointPolicy::Close,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "nurbs-sketch")]
#[command(about = "Sample a NURBS curve from weighted control points", long_about = None)]
struct Args {
    /// JSON array of {"x", "y", "weight"} control points
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// TOML file with curve options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Curve degree
    #[arg(short, long)]
    degree: Option<usize>,

    /// Number of parameter samples
    #[arg(short, long)]
    samples: Option<usize>,

    #[arg(long, value_enum)]
    endpoint: Option<Endpoint>,

    /// Fail when a sample has a non-positive weight sum
    #[arg(long)]
    strict: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut options = match &args.config {
        Some(path) => CurveOptions::try_load_from_file(path)
            .with_context(|| format!("Failed to load curve options: {:?}", path))?,
        None => CurveOptions::default(),
    };
    if let Some(degree) = args.degree {
        options.degree = degree;
    }
    if let Some(samples) = args.samples {
        options.samples = samples;
    }
    if let Some(endpoint) = args.endpoint {
        options.endpoint = endpoint.into();
    }

    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {:?}", args.input))?;
    let points = parse_points(&json).context("Failed to parse control points")?;

    log::info!(
        "Sampling {} control points (degree {}, {} samples)",
        points.len(),
        options.degree,
        options.samples
    );

    let curve = if args.strict {
        evaluate_strict(&points, &options)
    } else {
        evaluate_with(&points, &options)
    }
    .context("Curve evaluation failed")?;

    let report = serde_json::to_string_pretty(&CurveReport::from(&curve))?;
    match &args.output {
        Some(path) => {
            fs::write(path, report)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            log::info!("Wrote {} points to {}", curve.len(), path.display());
        }
        None => println!("{}", report),
    }

    Ok(())
}
