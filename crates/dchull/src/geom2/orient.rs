use super::Point2;

/// Twice the signed area of the triangle `(p1, p2, p3)`.
///
/// - `> 0`: `p1 → p2 → p3` turns left (counterclockwise).
/// - `< 0`: turns right (clockwise).
/// - `= 0`: collinear.
///
/// NaN or infinite coordinates give an unspecified sign.
#[inline]
pub fn orientation(p1: Point2, p2: Point2, p3: Point2) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

/// Turn classification of three points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// Classify the turn `p1 → p2 → p3` by the sign of [`orientation`].
#[inline]
pub fn turn(p1: Point2, p2: Point2, p3: Point2) -> Turn {
    let o = orientation(p1, p2, p3);
    if o > 0.0 {
        Turn::Left
    } else if o < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}
