//! PyO3 bindings for selected `dchull` functions.
//!
//! Notes
//! - Keep bindings thin and predictable; points cross the boundary as
//!   `(x, y)` tuples.
//! - The hull itself stays in Rust (`dchull` crate); only the entry points
//!   Python callers need are bound here.

mod common;
mod geom;

use pyo3::prelude::*;

#[pymodule]
fn dchull_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    Ok(())
}
