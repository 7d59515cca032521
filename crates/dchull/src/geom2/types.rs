//! Point type shared by the whole crate.
//!
//! Points are plain `nalgebra` column vectors. They carry no identity beyond
//! their coordinates, so two equal points are interchangeable everywhere.

use nalgebra::Vector2;

/// A point in the plane.
pub type Point2 = Vector2<f64>;

/// Shorthand constructor, mostly for tests and literals.
#[inline]
pub fn point(x: f64, y: f64) -> Point2 {
    Vector2::new(x, y)
}
