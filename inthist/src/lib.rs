//! inthist - Integral histograms for Rust
//!
//! An integral histogram generalizes the summed-area table from scalar
//! sums to per-bin histograms. After one `O(W * H * B)` pass over the
//! input, the histogram of any rectangle is available in `O(B)`, which
//! makes dense sliding-window comparisons independent of the window size.
//!
//! # Overview
//!
//! - Build tables from per-channel sample grids: plain counts,
//!   magnitude-weighted sums, or joint value x magnitude counts
//! - Query the histogram of any rectangle
//! - Compare two tables window by window with any distance function
//!
//! # Example
//!
//! ```
//! use inthist::{Grid, HistogramConfig, IntegralHistogram, Rect};
//!
//! let grid = Grid::from_rows(&[[0u8, 255], [255, 0]]).unwrap();
//! let engine = IntegralHistogram::<u8, u32>::new(HistogramConfig::new(2, 2, 1, 2)).unwrap();
//! let table = engine.integral_histogram(&[grid]).unwrap();
//!
//! assert_eq!(table.cell(0, 2, 2).unwrap(), &[2, 2]);
//! assert_eq!(table.region_histogram(Rect::new(0, 0, 2, 2)).unwrap(), vec![2, 2]);
//!
//! let map = engine
//!     .compare(&table, &table, 1, 1, inthist::distance::chi_squared)
//!     .unwrap();
//! assert!(map.as_slice().iter().all(|&d| d == 0.0));
//! ```

// Re-export core types (data structures used everywhere)
pub use inthist_core::*;

// Re-export the engine
pub use inthist_integral::{
    BinMapper, DissimilarityMap, HistogramConfig, IntegralError, IntegralHistogram,
    IntegralResult, IntegralTable, JointBinMapper, ScanOrder, compare_tables, distance,
};
