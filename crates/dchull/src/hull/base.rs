use crate::geom2::{orientation, Point2};

/// Hull of 1–3 points sorted by `(x, y)`.
///
/// - 1 point: that point.
/// - 2 points: both, in input order.
/// - 3 points: counterclockwise triangle, or the two extremes when collinear.
///
/// Slices longer than 3 are a caller bug; only the first and last two points
/// would be looked at.
pub fn small_hull(pts: &[Point2]) -> Vec<Point2> {
    debug_assert!(
        (1..=3).contains(&pts.len()),
        "small_hull takes 1..=3 points"
    );
    match pts {
        [] => Vec::new(),
        [p] => vec![*p],
        [p, q] => vec![*p, *q],
        [left, .., mid, right] => {
            let o = orientation(*left, *mid, *right);
            if o > 0.0 {
                vec![*left, *mid, *right]
            } else if o < 0.0 {
                vec![*left, *right, *mid]
            } else {
                vec![*left, *right]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::point;

    #[test]
    fn single_and_pair() {
        let p = point(3.0, -1.0);
        assert_eq!(small_hull(&[p]), vec![p]);
        let q = point(4.0, 2.0);
        assert_eq!(small_hull(&[p, q]), vec![p, q]);
    }

    #[test]
    fn triangle_orders_ccw() {
        let a = point(0.0, 0.0);
        let b = point(1.0, -1.0);
        let c = point(2.0, 0.0);
        // a → b → c is already a left turn
        assert_eq!(small_hull(&[a, b, c]), vec![a, b, c]);
        // mid above the chord: swap mid and right
        let m = point(1.0, 1.0);
        assert_eq!(small_hull(&[a, m, c]), vec![a, c, m]);
    }

    #[test]
    fn collinear_drops_middle() {
        let a = point(0.0, 0.0);
        let b = point(1.0, 0.0);
        let c = point(2.0, 0.0);
        assert_eq!(small_hull(&[a, b, c]), vec![a, c]);
    }
}
