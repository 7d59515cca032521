//! Curated surface for callers that want the building blocks.
//!
//! The recursive driver only needs `convex_hull`; the pieces below are exposed
//! so that benches, bindings and experiments can time or test them one by one.

// Primitives
pub use crate::geom2::{orientation, point, turn, Point2, Turn};
// Hull construction
pub use crate::hull::{
    convex_hull, convex_hull_with, hull_of_sorted, leftmost, lower_tangent, merge_hulls,
    rightmost, small_hull, sort_points, stitch, try_convex_hull, upper_tangent, validate_points,
    HullCfg, HullError, Tangent,
};
// Checks
pub use crate::props::{
    contains, contains_eps, first_outside, is_convex_ccw, is_convex_ccw_eps, is_rotation_of,
    same_vertex_set,
};
// Point clouds
pub use crate::rand::{uniform_points, Cloud, DEFAULT_SEED, DEFAULT_SIDE};
