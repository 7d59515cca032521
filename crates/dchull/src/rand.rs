//! Seeded random point clouds for benchmarks, tests and the CLI driver.
//!
//! Determinism: every sampler takes an explicit `seed` and builds its own
//! `StdRng`, so a `(seed, n)` pair always yields the same cloud.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{point, Point2};

/// Seed used by the benchmarking driver when none is given.
pub const DEFAULT_SEED: u64 = 42;
/// Side length of the sampling square used by the benchmarking driver.
pub const DEFAULT_SIDE: f64 = 1000.0;

/// Point distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cloud {
    /// Uniform in `[0, side)²`. Expected hull size grows like `log n`.
    Square { side: f64 },
    /// On the circle of the given radius around the origin. Every point is
    /// (up to rounding) a hull vertex, which stresses the merge step.
    Circle { radius: f64 },
}

impl Default for Cloud {
    fn default() -> Self {
        Cloud::Square { side: DEFAULT_SIDE }
    }
}

impl Cloud {
    pub fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Point2> {
        match *self {
            Cloud::Square { side } => (0..n)
                .map(|_| {
                    let x = rng.gen::<f64>() * side;
                    let y = rng.gen::<f64>() * side;
                    point(x, y)
                })
                .collect(),
            Cloud::Circle { radius } => (0..n)
                .map(|_| {
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    point(radius * th.cos(), radius * th.sin())
                })
                .collect(),
        }
    }

    /// Sample `n` points with a fresh RNG seeded from `seed`.
    pub fn sample_seeded(&self, n: usize, seed: u64) -> Vec<Point2> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.sample(n, &mut rng)
    }
}

/// `n` uniform points in `[0, side)²`.
pub fn uniform_points(n: usize, seed: u64, side: f64) -> Vec<Point2> {
    Cloud::Square { side }.sample_seeded(n, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_clouds_replay() {
        let a = uniform_points(50, 7, 10.0);
        let b = uniform_points(50, 7, 10.0);
        assert_eq!(a, b);
        assert_ne!(a, uniform_points(50, 8, 10.0));
        assert!(a
            .iter()
            .all(|p| (0.0..10.0).contains(&p.x) && (0.0..10.0).contains(&p.y)));
    }

    #[test]
    fn circle_points_have_radius() {
        let pts = Cloud::Circle { radius: 3.0 }.sample_seeded(64, 1);
        assert_eq!(pts.len(), 64);
        assert!(pts.iter().all(|p| (p.norm() - 3.0).abs() < 1e-12));
    }
}
