//! Timing table for the hull driver: one row per input size.

use dchull::rand::Cloud;
use dchull::{convex_hull_with, HullCfg, Point2};
use serde::Serialize;
use std::time::Instant;

/// Sizes timed when none are given on the command line.
pub const DEFAULT_SIZES: [usize; 7] = [10, 100, 1000, 5000, 10_000, 50_000, 100_000];

#[derive(Clone, Debug, Serialize)]
pub struct BenchRow {
    pub n: usize,
    pub time_ms: f64,
    pub hull_size: usize,
    /// `time_ms / (n log2 n)`; `None` for `n < 2`.
    pub per_nlogn: Option<f64>,
}

impl BenchRow {
    pub fn new(n: usize, time_ms: f64, hull_size: usize) -> Self {
        let nlogn = n as f64 * (n as f64).log2();
        let per_nlogn = (nlogn > 0.0).then(|| time_ms / nlogn);
        Self {
            n,
            time_ms,
            hull_size,
            per_nlogn,
        }
    }
}

/// Generate and time one cloud per size. Point generation is not timed.
pub fn run_bench(sizes: &[usize], cloud: Cloud, seed: u64, cfg: &HullCfg) -> Vec<BenchRow> {
    sizes
        .iter()
        .map(|&n| {
            let points: Vec<Point2> = cloud.sample_seeded(n, seed);
            let start = Instant::now();
            let hull = convex_hull_with(&points, cfg);
            let time_ms = start.elapsed().as_secs_f64() * 1e3;
            tracing::debug!(n, time_ms, hull_size = hull.len(), "bench_row");
            BenchRow::new(n, time_ms, hull.len())
        })
        .collect()
}

pub fn format_table(rows: &[BenchRow]) -> String {
    let mut out = format!(
        "{:<12} {:<15} {:<15} {:<15}\n",
        "Input Size", "Time (ms)", "Hull Size", "Time/n log n"
    );
    out.push_str(&"-".repeat(56));
    out.push('\n');
    for row in rows {
        let ratio = row
            .per_nlogn
            .map(|r| format!("{r:.6}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<12} {:<15.3} {:<15} {:<15}\n",
            row.n, row.time_ms, row.hull_size, ratio
        ));
    }
    out
}

/// `(x.xx, y.yy)`.
pub fn format_point(p: &Point2) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}
