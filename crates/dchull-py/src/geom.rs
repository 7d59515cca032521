//! Hull and orientation bindings.

use crate::common::{map_hull_err, points_from_py, points_to_py};
use nalgebra::Vector2;
use pyo3::prelude::*;

/// Convex hull in counterclockwise order. Raises `ValueError` on empty input
/// or non-finite coordinates.
#[pyfunction]
pub fn convex_hull(points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    let pts = points_from_py(points);
    dchull::try_convex_hull(&pts)
        .map(points_to_py)
        .map_err(map_hull_err)
}

/// Twice the signed area of triangle (a, b, c); positive for a left turn.
#[pyfunction]
pub fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    dchull::orientation(
        Vector2::new(a.0, a.1),
        Vector2::new(b.0, b.1),
        Vector2::new(c.0, c.1),
    )
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(orientation, m)?)?;
    Ok(())
}
