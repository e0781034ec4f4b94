//! Outer surface of the restaurant recommender
//!
//! A command line front end and, with the `python` feature, a Python extension
//! module (`restaurant_rec`) built with PyO3.

pub mod cli;
pub mod session;

#[cfg(feature = "python")]
pub mod python_types;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "restaurant_rec")]
pub fn restaurant_rec(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python_types::Recommender>()?;
    m.add_class::<python_types::Recommendation>()?;
    Ok(())
}
