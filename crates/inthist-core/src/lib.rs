//! inthist-core - Shared data structures for integral histograms
//!
//! This crate provides the plain data types the engine consumes and
//! produces:
//!
//! - [`Grid`] - single-channel row-major sample grid
//! - [`Rect`] - half-open rectangular region descriptor
//! - [`Sample`] / [`Accumulator`] - numeric traits for sample values and
//!   per-bin table entries
//! - [`Error`] / [`Result`] - error type for grid construction and access

pub mod error;
pub mod grid;
pub mod numeric;
pub mod rect;

pub use error::{Error, Result};
pub use grid::Grid;
pub use numeric::{Accumulator, Sample, SampleDepth};
pub use rect::Rect;
