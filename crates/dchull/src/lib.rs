//! Divide-and-conquer convex hull in the plane.
//!
//! Layout
//! - `geom2`: point type and the orientation predicate.
//! - `hull`: base cases, tangent search, merge, and the recursive driver.
//! - `props`: convexity/containment checks on computed hulls.
//! - `rand`: seeded point clouds for benchmarks and tests.
//!
//! Numeric policy: exact floating-point sign tests, no epsilons in the
//! construction. Inputs with NaN or infinite coordinates give unspecified
//! results through [`convex_hull`]; [`try_convex_hull`] rejects them.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod props;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{orientation, point, Point2};
pub use hull::{convex_hull, convex_hull_with, try_convex_hull, HullCfg, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{orientation, point, turn, Point2, Turn};
    pub use crate::hull::{convex_hull, convex_hull_with, try_convex_hull, HullCfg, HullError};
    pub use crate::rand::{uniform_points, Cloud};
}
