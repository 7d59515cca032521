use super::base::small_hull;
use super::cfg::HullCfg;
use super::merge::merge_hulls;
use crate::geom2::Point2;

/// Sort by x ascending, then y ascending.
pub fn sort_points(points: &mut [Point2]) {
    points.sort_unstable_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
}

/// Convex hull with the default configuration.
///
/// Returns the hull in counterclockwise order. Fewer than 3 points come back
/// unchanged. Duplicate points are not removed. Non-finite coordinates give an
/// unspecified result; use [`super::try_convex_hull`] to reject them.
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    convex_hull_with(points, &HullCfg::default())
}

/// Convex hull with an explicit configuration.
pub fn convex_hull_with(points: &[Point2], cfg: &HullCfg) -> Vec<Point2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut sorted = points.to_vec();
    sort_points(&mut sorted);
    hull_of_sorted(&sorted, cfg)
}

/// Recursive hull of a non-empty slice already sorted by `(x, y)`.
pub fn hull_of_sorted(sorted: &[Point2], cfg: &HullCfg) -> Vec<Point2> {
    if sorted.len() <= 3 {
        return small_hull(sorted);
    }
    // inclusive bounds [0, n-1] split at (n-1)/2: left keeps the extra point
    let mid = (sorted.len() - 1) / 2 + 1;
    let (lo, hi) = sorted.split_at(mid);
    let (left, right) = recurse_halves(lo, hi, cfg);
    merge_hulls(&left, &right)
}

#[cfg(feature = "parallel")]
fn recurse_halves(lo: &[Point2], hi: &[Point2], cfg: &HullCfg) -> (Vec<Point2>, Vec<Point2>) {
    if lo.len() + hi.len() >= cfg.parallel_threshold {
        rayon::join(|| hull_of_sorted(lo, cfg), || hull_of_sorted(hi, cfg))
    } else {
        (hull_of_sorted(lo, cfg), hull_of_sorted(hi, cfg))
    }
}

#[cfg(not(feature = "parallel"))]
fn recurse_halves(lo: &[Point2], hi: &[Point2], cfg: &HullCfg) -> (Vec<Point2>, Vec<Point2>) {
    (hull_of_sorted(lo, cfg), hull_of_sorted(hi, cfg))
}
