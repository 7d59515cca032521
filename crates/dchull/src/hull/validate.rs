use thiserror::Error;

use crate::geom2::Point2;

/// Input rejected at the validating entry point.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HullError {
    #[error("no input points")]
    Empty,
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
}

/// Reject empty input and NaN/infinite coordinates.
pub fn validate_points(points: &[Point2]) -> Result<(), HullError> {
    if points.is_empty() {
        return Err(HullError::Empty);
    }
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}
