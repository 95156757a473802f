//! inthist-integral - Integral histogram engine
//!
//! An integral histogram stores, for every grid position, the histogram of
//! all samples above and to the left of it. Once built, the histogram of
//! any axis-aligned rectangle comes out of four table cells in `O(B)`,
//! independent of the rectangle size.
//!
//! This crate provides:
//!
//! - Table construction from per-channel grids, as plain counts,
//!   magnitude-weighted sums or joint value x magnitude counts
//! - Region histogram queries by inclusion-exclusion
//! - Dense sliding-window comparison of two tables with a pluggable
//!   distance function
//! - A few ready-made distances (chi-squared, L1, intersection)
//!
//! # Usage
//!
//! ```
//! use inthist_core::{Grid, Rect};
//! use inthist_integral::{distance, HistogramConfig, IntegralHistogram};
//!
//! let grid = Grid::from_fn(16, 16, |x, y| ((x + y) * 8) as u8).unwrap();
//! let engine = IntegralHistogram::<u8, u32>::new(HistogramConfig::new(16, 16, 1, 8)).unwrap();
//! let table = engine.integral_histogram(&[grid]).unwrap();
//!
//! let hist = table.region_histogram(Rect::new(4, 4, 8, 8)).unwrap();
//! assert_eq!(hist.iter().sum::<u32>(), 64);
//!
//! let map = engine.compare(&table, &table, 5, 5, distance::chi_squared).unwrap();
//! assert_eq!(map.dimensions(), (12, 12));
//! ```

mod bin;
mod builder;
mod compare;
mod config;
pub mod distance;
mod error;
mod parallel;
mod query;
mod scan;
mod table;

pub use bin::{BinMapper, JointBinMapper};
pub use builder::IntegralHistogram;
pub use compare::{DissimilarityMap, compare_tables};
pub use config::{HistogramConfig, ScanOrder};
pub use error::{IntegralError, IntegralResult};
pub use table::IntegralTable;
