use dchull::{HullError, Point2};
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(pts: Vec<(f64, f64)>) -> Vec<Point2> {
    pts.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()
}

pub fn points_to_py(pts: Vec<Point2>) -> Vec<(f64, f64)> {
    pts.into_iter().map(|p| (p.x, p.y)).collect()
}

pub fn map_hull_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
