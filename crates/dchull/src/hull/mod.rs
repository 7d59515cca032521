//! Divide-and-conquer convex hull.
//!
//! Purpose
//! - Sort once by `(x, y)`, split the sorted buffer in halves down to ranges of
//!   at most 3 points, and merge sibling hulls bottom-up along their upper and
//!   lower tangents. O(n log n) overall: each level does linear merge work.
//!
//! Invariants
//! - Every hull is counterclockwise with no repeated closing vertex.
//! - Hulls are built fresh at each merge; children are never modified.
//! - Exact sign tests only. Ties (orientation exactly 0) stop tangent pointers,
//!   which decides which vertices survive on collinear configurations.
//!
//! Code cross-refs: `geom2::orientation`, `props` (checks used by the tests)

mod base;
mod cfg;
mod divide;
mod merge;
mod tangent;
mod validate;

pub use base::small_hull;
pub use cfg::HullCfg;
pub use divide::{convex_hull, convex_hull_with, hull_of_sorted, sort_points};
pub use merge::{merge_hulls, stitch};
pub use tangent::{leftmost, lower_tangent, rightmost, upper_tangent, Tangent};
pub use validate::{validate_points, HullError};

use crate::geom2::Point2;

/// Validating entry point: rejects empty input and non-finite coordinates,
/// then runs [`convex_hull`].
pub fn try_convex_hull(points: &[Point2]) -> Result<Vec<Point2>, HullError> {
    validate_points(points)?;
    Ok(convex_hull(points))
}
