//! Geometric checks on computed hulls.
//!
//! Used by the test suites and the CLI `check` command. All predicates take a
//! slack `eps` on the orientation value, in the same sense as elsewhere:
//! `eps > 0` is permissive (tolerates rounding), `eps = 0` is exact.

use crate::geom2::{orientation, Point2};
use crate::hull::sort_points;

/// Every cyclic triple turns left or is collinear (up to `eps`).
/// Hulls with fewer than 3 vertices are trivially convex.
pub fn is_convex_ccw_eps(hull: &[Point2], eps: f64) -> bool {
    let n = hull.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]) >= -eps)
}

/// Exact convexity check.
#[inline]
pub fn is_convex_ccw(hull: &[Point2]) -> bool {
    is_convex_ccw_eps(hull, 0.0)
}

/// `p` lies on or inside the polygon described by `hull`.
///
/// Degenerate hulls: a single vertex contains only itself, a segment contains
/// the collinear points between its endpoints.
pub fn contains_eps(hull: &[Point2], p: Point2, eps: f64) -> bool {
    match hull {
        [] => false,
        [a] => (*a - p).norm() <= eps,
        [a, b] => {
            orientation(*a, *b, p).abs() <= eps
                && p.x >= a.x.min(b.x) - eps
                && p.x <= a.x.max(b.x) + eps
                && p.y >= a.y.min(b.y) - eps
                && p.y <= a.y.max(b.y) + eps
        }
        _ => {
            let n = hull.len();
            (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], p) >= -eps)
        }
    }
}

/// Exact containment check.
#[inline]
pub fn contains(hull: &[Point2], p: Point2) -> bool {
    contains_eps(hull, p, 0.0)
}

/// Index of the first point outside `hull`, if any.
pub fn first_outside(hull: &[Point2], points: &[Point2], eps: f64) -> Option<usize> {
    points.iter().position(|p| !contains_eps(hull, *p, eps))
}

/// Same vertex multiset, ignoring start vertex and order.
pub fn same_vertex_set(a: &[Point2], b: &[Point2]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut sa = a.to_vec();
    let mut sb = b.to_vec();
    sort_points(&mut sa);
    sort_points(&mut sb);
    sa == sb
}

/// `b` is a cyclic rotation of `a` (same polygon, same orientation).
pub fn is_rotation_of(a: &[Point2], b: &[Point2]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n).any(|shift| (0..n).all(|i| a[(i + shift) % n] == b[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::point;

    fn unit_square() -> Vec<Point2> {
        vec![
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
        ]
    }

    #[test]
    fn convexity_detects_clockwise_and_reflex() {
        let sq = unit_square();
        assert!(is_convex_ccw(&sq));
        let cw: Vec<_> = sq.iter().rev().copied().collect();
        assert!(!is_convex_ccw(&cw));
        let dart = vec![
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(1.0, 0.2),
            point(1.0, 2.0),
        ];
        assert!(!is_convex_ccw(&dart));
    }

    #[test]
    fn containment_boundary_and_degenerate() {
        let sq = unit_square();
        assert!(contains(&sq, point(0.5, 0.5)));
        assert!(contains(&sq, point(1.0, 0.5)));
        assert!(!contains(&sq, point(1.5, 0.5)));

        let seg = [point(0.0, 0.0), point(2.0, 2.0)];
        assert!(contains(&seg, point(1.0, 1.0)));
        assert!(!contains(&seg, point(3.0, 3.0)));
        assert!(!contains(&seg, point(1.0, 0.0)));

        assert!(contains(&[point(1.0, 1.0)], point(1.0, 1.0)));
        assert!(!contains(&[], point(0.0, 0.0)));
        assert_eq!(first_outside(&sq, &[point(0.2, 0.2), point(-1.0, 0.0)], 0.0), Some(1));
    }

    #[test]
    fn rotation_and_vertex_set() {
        let sq = unit_square();
        let rotated = vec![sq[2], sq[3], sq[0], sq[1]];
        assert!(is_rotation_of(&sq, &rotated));
        assert!(same_vertex_set(&sq, &rotated));
        let reversed: Vec<_> = sq.iter().rev().copied().collect();
        assert!(!is_rotation_of(&sq, &reversed));
        assert!(same_vertex_set(&sq, &reversed));
        assert!(!same_vertex_set(&sq, &sq[..3]));
    }
}
