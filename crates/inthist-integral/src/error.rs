//! Error types for inthist-integral
//!
//! Every failure is detected before any table is allocated or scanned, so
//! callers never observe a partially built result.

use inthist_core::{Rect, SampleDepth};
use thiserror::Error;

/// Errors that can occur while building, querying or comparing tables
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegralError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] inthist_core::Error),

    /// Input shape differs from what the configuration requires
    #[error("dimension mismatch: {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which quantity disagreed
        what: &'static str,
        /// Expected value
        expected: String,
        /// Actual value
        actual: String,
    },

    /// Value and magnitude samples use different representations
    #[error("type mismatch: value samples are {value}, magnitude samples are {magnitude}")]
    TypeMismatch {
        /// Value sample depth
        value: SampleDepth,
        /// Magnitude sample depth
        magnitude: SampleDepth,
    },

    /// Rejected configuration or parameters
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Region does not fit inside the table
    #[error("region {rect:?} out of bounds for {width}x{height} table")]
    OutOfBounds {
        /// Offending region
        rect: Rect,
        /// Grid width the table was built for
        width: usize,
        /// Grid height the table was built for
        height: usize,
    },
}

impl IntegralError {
    pub(crate) fn dimension_mismatch(
        what: &'static str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        IntegralError::DimensionMismatch {
            what,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Result type for integral histogram operations
pub type IntegralResult<T> = Result<T, IntegralError>;
