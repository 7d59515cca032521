//! dchull-cli: timing table, worked example, and CSV runs for the
//! divide-and-conquer convex hull.
//!
//! Logging goes to stderr (filter with `RUST_LOG`); tables and JSON go to stdout.

mod bench;
mod points_io;
mod provenance;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dchull::props::{first_outside, is_convex_ccw_eps};
use dchull::rand::{Cloud, DEFAULT_SEED, DEFAULT_SIDE};
use dchull::{convex_hull_with, point, try_convex_hull, HullCfg};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bench::{format_point, format_table, run_bench, DEFAULT_SIZES};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "dchull-cli", version)]
#[command(about = "Divide-and-conquer convex hull: benchmarks and runs")]
struct Cmd {
    /// Ranges with at least this many points recurse in parallel
    /// (only with the `parallel` feature of `dchull`)
    #[arg(long, global = true, default_value_t = HullCfg::DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CloudKind {
    /// Uniform in [0, side)²
    Square,
    /// On a circle of radius side/2
    Circle,
}

#[derive(Subcommand)]
enum Action {
    /// Time the hull on seeded random clouds and print a table
    Bench {
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        #[arg(long, default_value_t = DEFAULT_SIDE)]
        side: f64,
        #[arg(long, value_enum, default_value_t = CloudKind::Square)]
        cloud: CloudKind,
        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the hull of a small worked example
    Demo,
    /// Compute the hull of an x,y CSV and write it (.csv or .parquet) with provenance
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compute the hull of an x,y CSV and verify convexity and containment
    Check {
        #[arg(long)]
        input: PathBuf,
        /// Slack on orientation values
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    let cfg = HullCfg {
        parallel_threshold: cmd.parallel_threshold,
    };
    match cmd.action {
        Action::Bench {
            sizes,
            seed,
            side,
            cloud,
            json,
        } => bench_cmd(&sizes, seed, side, cloud, json, &cfg),
        Action::Demo => demo(&cfg),
        Action::Run { input, out } => run(input, out),
        Action::Check { input, eps } => check(input, eps),
        Action::Report => report(),
    }
}

fn bench_cmd(
    sizes: &[usize],
    seed: u64,
    side: f64,
    kind: CloudKind,
    json: bool,
    cfg: &HullCfg,
) -> Result<()> {
    if !(side.is_finite() && side > 0.0) {
        bail!("--side must be positive and finite, got {side}");
    }
    let cloud = match kind {
        CloudKind::Square => Cloud::Square { side },
        CloudKind::Circle => Cloud::Circle { radius: side / 2.0 },
    };
    tracing::info!(?sizes, seed, ?cloud, "bench");
    let rows = run_bench(sizes, cloud, seed, cfg);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("Convex Hull - Divide and Conquer");
        println!("================================\n");
        print!("{}", format_table(&rows));
    }
    Ok(())
}

fn demo(cfg: &HullCfg) -> Result<()> {
    let input = [
        point(0.0, 0.0),
        point(1.0, 1.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(1.0, 0.5),
        point(0.0, 2.0),
    ];
    println!("Input points:");
    for p in &input {
        println!("  {}", format_point(p));
    }
    let hull = convex_hull_with(&input, cfg);
    println!("\nConvex hull (counterclockwise):");
    for p in &hull {
        println!("  {}", format_point(p));
    }
    Ok(())
}

fn run(input: PathBuf, out: PathBuf) -> Result<()> {
    // reject the output path before reading anything
    let format = points_io::TableFormat::from_path(&out)?;
    let points = points_io::read_points_csv(&input)?;
    tracing::info!(input = %input.display(), points = points.len(), "run");
    let hull = try_convex_hull(&points)?;
    points_io::write_points(&out, &hull)?;
    tracing::info!(out = %out.display(), ?format, hull_size = hull.len(), "hull_written");

    let payload = Payload::new("run")
        .with_input(input.to_string_lossy())
        .with_hull(points.len(), hull.len())
        .with_params(serde_json::json!({ "format": format!("{format:?}").to_lowercase() }));
    let prov = write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

#[derive(Debug, Serialize)]
struct CheckReport {
    points: usize,
    hull_size: usize,
    convex: bool,
    first_outside: Option<usize>,
    eps: f64,
}

fn check(input: PathBuf, eps: f64) -> Result<()> {
    let points = points_io::read_points_csv(&input)?;
    let hull = try_convex_hull(&points)?;
    let report = CheckReport {
        points: points.len(),
        hull_size: hull.len(),
        convex: is_convex_ccw_eps(&hull, eps),
        first_outside: first_outside(&hull, &points, eps),
        eps,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.convex || report.first_outside.is_some() {
        tracing::warn!(input = %input.display(), ?report, "check_failed");
        bail!("hull of {} failed the convexity/containment check", input.display());
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "dchull_version": dchull::VERSION,
        "parallel": cfg!(feature = "parallel"),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
