//! inthist-test - Regression test framework for the integral histogram crates
//!
//! Every regression test creates a [`RegParams`], runs a numbered series of
//! comparisons through it and asserts on [`RegParams::cleanup`], which
//! prints a summary of every failure. Failures do not stop the test early,
//! so one run reports all mismatching indices.
//!
//! Inputs are synthetic and deterministic: see [`gradient_grid`],
//! [`checker_grid`], [`lcg_grid`] and [`Lcg`].
//!
//! # Usage
//!
//! ```
//! use inthist_test::{RegParams, gradient_grid};
//!
//! let grid = gradient_grid(4, 3, 255u8).unwrap();
//! let mut rp = RegParams::new("doc");
//! rp.compare_values(12.0, grid.data().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod grids;
mod params;

pub use error::{TestError, TestResult};
pub use grids::{Lcg, checker_grid, gradient_grid, lcg_grid};
pub use params::RegParams;
