//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Slice comparison failed
    #[error("slice comparison failed at index {index}: first difference at position {position}")]
    SliceMismatch { index: usize, position: usize },

    /// Slices of different length were compared
    #[error("slice comparison failed at index {index}: lengths {expected} vs {actual}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
