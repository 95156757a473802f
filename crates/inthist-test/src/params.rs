//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use std::fmt::Debug;

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison and every
/// failure recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "region")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters and print the banner
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never matches
        if !(diff <= delta) {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two slices element by element for exact equality
    ///
    /// # Returns
    ///
    /// `true` if both slices have the same length and contents.
    pub fn compare_slices<T: PartialEq + Debug>(&mut self, expected: &[T], actual: &[T]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            self.record(TestError::LengthMismatch {
                index: self.index,
                expected: expected.len(),
                actual: actual.len(),
            });
            return false;
        }

        match expected.iter().zip(actual).position(|(e, a)| e != a) {
            Some(position) => {
                eprintln!(
                    "  expected {:?}, got {:?}",
                    expected[position], actual[position]
                );
                self.record(TestError::SliceMismatch {
                    index: self.index,
                    position,
                });
                false
            }
            None => true,
        }
    }

    /// Check a condition that has no natural expected value
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.compare_values(1.0, if condition { 1.0 } else { 0.0 }, 0.0) || {
            eprintln!("  condition failed: {}", what);
            false
        }
    }

    fn record(&mut self, error: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, error);
        self.failures.push(error);
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg ({} comparisons)", self.test_name, self.index);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.failures.is_empty()
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }

    /// First recorded failure, if any
    pub fn first_failure(&self) -> TestResult<()> {
        match self.failures.first() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
