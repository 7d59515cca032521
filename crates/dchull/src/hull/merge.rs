use super::tangent::{lower_tangent, upper_tangent, Tangent};
use crate::geom2::Point2;

/// Append `hull[from..=to]` walking counterclockwise with wrap-around.
fn walk_ccw(out: &mut Vec<Point2>, hull: &[Point2], from: usize, to: usize) {
    let n = hull.len();
    let mut i = from;
    out.push(hull[i]);
    while i != to {
        i = (i + 1) % n;
        out.push(hull[i]);
    }
}

/// Stitch two hulls along precomputed tangents.
///
/// Walks the left hull from the upper to the lower tangent vertex, then the
/// right hull from the lower to the upper tangent vertex, both counterclockwise
/// and inclusive. The inputs are not modified.
pub fn stitch(left: &[Point2], right: &[Point2], upper: Tangent, lower: Tangent) -> Vec<Point2> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    walk_ccw(&mut merged, left, upper.left, lower.left);
    walk_ccw(&mut merged, right, lower.right, upper.right);
    merged
}

/// Merge a left hull and a right hull into one counterclockwise hull.
///
/// Pre: both non-empty, counterclockwise, and every point of `left` lies left
/// of (or on the sort order before) every point of `right`.
pub fn merge_hulls(left: &[Point2], right: &[Point2]) -> Vec<Point2> {
    let upper = upper_tangent(left, right);
    let lower = lower_tangent(left, right);
    stitch(left, right, upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::point;

    #[test]
    fn merge_two_triangles_to_square() {
        let left = vec![point(0.0, 0.0), point(1.0, 0.5), point(0.0, 2.0)];
        let right = vec![point(1.0, 1.0), point(2.0, 0.0), point(2.0, 2.0)];
        let merged = merge_hulls(&left, &right);
        assert_eq!(
            merged,
            vec![
                point(0.0, 2.0),
                point(0.0, 0.0),
                point(2.0, 0.0),
                point(2.0, 2.0)
            ]
        );
    }

    #[test]
    fn stitch_wraps_around_left_hull() {
        let left = vec![
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
        ];
        let right = vec![point(3.0, 0.5)];
        let upper = Tangent { left: 3, right: 0 };
        let lower = Tangent { left: 0, right: 0 };
        // 3 → 0 wraps; the single right vertex is emitted once
        assert_eq!(
            stitch(&left, &right, upper, lower),
            vec![point(0.0, 1.0), point(0.0, 0.0), point(3.0, 0.5)]
        );
    }

    #[test]
    fn coinciding_endpoints_emit_one_vertex() {
        let left = vec![point(0.0, 0.0)];
        let right = vec![point(1.0, 0.0)];
        let merged = merge_hulls(&left, &right);
        assert_eq!(merged, vec![point(0.0, 0.0), point(1.0, 0.0)]);
    }

    #[test]
    fn segment_and_segment_make_quad() {
        // two vertical segments, already in (x, y) order
        let left = vec![point(0.0, 0.0), point(0.0, 1.0)];
        let right = vec![point(1.0, 0.0), point(1.0, 1.0)];
        let merged = merge_hulls(&left, &right);
        assert_eq!(
            merged,
            vec![
                point(0.0, 1.0),
                point(0.0, 0.0),
                point(1.0, 0.0),
                point(1.0, 1.0)
            ]
        );
    }
}
