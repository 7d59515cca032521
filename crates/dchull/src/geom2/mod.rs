//! 2D geometry primitives for the hull construction.
//!
//! Purpose
//! - Provide the point type and the single orientation predicate every
//!   directional decision in `hull` is made with.
//! - Exact floating-point sign tests only; no epsilons anywhere in this module.
//!
//! Code cross-refs: `hull::tangent`, `hull::base`, `props`

mod orient;
mod types;

pub use orient::{orientation, turn, Turn};
pub use types::{point, Point2};
