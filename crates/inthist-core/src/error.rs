//! Error types for inthist-core
//!
//! Provides the error type for the shared data structures (grids and
//! regions). Engine-level failures live in `inthist-integral`, which wraps
//! this type.

use thiserror::Error;

/// inthist-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Backing buffer length does not match the grid dimensions
    #[error("data length {actual} doesn't match {width}x{height} = {expected}")]
    DataLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// Sample coordinate outside the grid
    #[error("sample ({x}, {y}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Result type alias for inthist-core operations
pub type Result<T> = std::result::Result<T, Error>;
